//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

use crate::config::{
    ServerConfig, CROSSOVER_TAIL_ROWS, DEFAULT_LONG_WINDOW, DEFAULT_RSI_WINDOW,
    DEFAULT_SHORT_WINDOW, DISCLAIMER,
};
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::{moving_average_crossover, CrossoverParams};
use crate::metrics::Metrics;
use crate::models::indicators::{CrossoverRow, RsiRow};
use crate::models::series::{PriceTable, CLOSE_COLUMN, DATE_COLUMN};

pub const SERVICE_NAME: &str = "troyonix-quant-api";

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Request failures, reported with a `detail` message
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("dates and closes must be the same length")]
    LengthMismatch { dates: usize, closes: usize },
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
    /// The calculation task panicked or was cancelled
    #[error("indicator calculation failed")]
    Calculation(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::LengthMismatch { .. } | ApiError::Indicator(_) => StatusCode::BAD_REQUEST,
            ApiError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

fn default_short_window() -> usize {
    DEFAULT_SHORT_WINDOW
}

fn default_long_window() -> usize {
    DEFAULT_LONG_WINDOW
}

fn default_rsi_window() -> usize {
    DEFAULT_RSI_WINDOW
}

#[derive(Debug, Deserialize)]
pub struct CrossoverRequest {
    /// Return only crossover events
    #[serde(default)]
    pub return_events_only: bool,
    /// Date strings (YYYY-MM-DD)
    pub dates: Vec<String>,
    /// Closing prices, same length as `dates`
    pub closes: Vec<f64>,
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

#[derive(Debug, Deserialize)]
pub struct RsiRequest {
    pub dates: Vec<String>,
    pub closes: Vec<f64>,
    #[serde(default = "default_rsi_window")]
    pub window: usize,
}

#[derive(Debug, Serialize)]
pub struct SignalPoint {
    pub date: String,
    pub close: f64,
    pub ma_short: f64,
    pub ma_long: f64,
    pub crossover: i8,
}

impl From<CrossoverRow> for SignalPoint {
    fn from(row: CrossoverRow) -> Self {
        Self {
            date: row.date,
            close: row.price,
            ma_short: row.ma_short,
            ma_long: row.ma_long,
            crossover: row.crossover.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RsiPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub close: f64,
    pub rsi: Option<f64>,
}

impl From<RsiRow> for RsiPoint {
    fn from(row: RsiRow) -> Self {
        Self {
            date: row.date,
            close: row.price,
            rsi: row.rsi,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CrossoverResponse {
    pub disclaimer: &'static str,
    pub signals: Vec<SignalPoint>,
}

#[derive(Debug, Serialize)]
pub struct RsiResponse {
    pub disclaimer: &'static str,
    pub rsi: Vec<RsiPoint>,
}

/// Build the engine input from the parallel request arrays
pub fn price_table(dates: Vec<String>, closes: Vec<f64>) -> Result<PriceTable, ApiError> {
    if dates.len() != closes.len() {
        return Err(ApiError::LengthMismatch {
            dates: dates.len(),
            closes: closes.len(),
        });
    }

    Ok(PriceTable::new()
        .with_text_column(DATE_COLUMN, dates)?
        .with_numeric_column(CLOSE_COLUMN, closes)?)
}

fn crossover_signals(request: CrossoverRequest) -> Result<Vec<SignalPoint>, ApiError> {
    let table = price_table(request.dates, request.closes)?;
    let params = CrossoverParams::new(request.short_window, request.long_window)
        .with_events_only(request.return_events_only);
    let rows = moving_average_crossover(&table, &params)?;

    // Full series responses are trimmed to the most recent rows.
    let skip = if params.events_only {
        0
    } else {
        rows.len().saturating_sub(CROSSOVER_TAIL_ROWS)
    };

    Ok(rows.into_iter().skip(skip).map(SignalPoint::from).collect())
}

fn rsi_points(request: RsiRequest) -> Result<Vec<RsiPoint>, ApiError> {
    let table = price_table(request.dates, request.closes)?;
    let rows = calculate_rsi(&table, CLOSE_COLUMN, request.window)?;
    Ok(rows.into_iter().map(RsiPoint::from).collect())
}

/// Run a CPU-bound calculation on the blocking pool
async fn run_blocking<T, F>(calculation: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(calculation)
        .await
        .map_err(|e| ApiError::Calculation(e.to_string()))?
}

fn record_outcome<T>(
    state: &AppState,
    indicator: &'static str,
    result: &Result<Vec<T>, ApiError>,
) {
    match result {
        Ok(rows) => {
            debug!(service = SERVICE_NAME, indicator, rows = rows.len(), "Indicator calculated");
            state.metrics.record_calculation(indicator, true);
        }
        Err(ApiError::Calculation(cause)) => {
            error!(service = SERVICE_NAME, indicator, cause = %cause, "Indicator calculation failed");
            state.metrics.record_calculation(indicator, false);
        }
        Err(e) => {
            warn!(service = SERVICE_NAME, indicator, error = %e, "Rejected indicator request");
            state.metrics.record_calculation(indicator, false);
        }
    }
}

/// Calculate moving average crossover signals from price data
pub async fn moving_average_crossover_handler(
    State(state): State<AppState>,
    Json(request): Json<CrossoverRequest>,
) -> Result<Json<CrossoverResponse>, ApiError> {
    let result = run_blocking(move || crossover_signals(request)).await;
    record_outcome(&state, "crossover", &result);

    Ok(Json(CrossoverResponse {
        disclaimer: DISCLAIMER,
        signals: result?,
    }))
}

/// Calculate RSI values from price data
pub async fn rsi_handler(
    State(state): State<AppState>,
    Json(request): Json<RsiRequest>,
) -> Result<Json<RsiResponse>, ApiError> {
    let result = run_blocking(move || rsi_points(request)).await;
    record_outcome(&state, "rsi", &result);

    Ok(Json(RsiResponse {
        disclaimer: DISCLAIMER,
        rsi: result?,
    }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "uptime_seconds": state.start_time.elapsed().as_secs(),
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            service = SERVICE_NAME,
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route(
            "/quant/moving-average-crossover",
            post(moving_average_crossover_handler),
        )
        .route("/quant/rsi", post(rsi_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|request: &Request| {
                            tracing::debug_span!(
                                "http_request",
                                service = SERVICE_NAME,
                                method = %request.method(),
                                path = %request.uri().path(),
                            )
                        })
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Serve the API until `shutdown` resolves
pub async fn start_server<F>(
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let metrics = Arc::new(Metrics::new()?);
    let app = create_router(AppState::new(metrics));
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    info!(service = SERVICE_NAME, address = %config.bind_address(), "HTTP server listening");
    info!(
        "Metrics endpoint available at http://{}/metrics",
        config.bind_address()
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
