//! Troyonix Quant API Server
//!
//! HTTP API serving moving average crossover and RSI calculations, plus
//! health check and metrics endpoints. The service is stateless and can be
//! horizontally scaled.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use troyonix::config::ServerConfig;
use troyonix::core::http::{start_server, SERVICE_NAME};
use troyonix::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging(SERVICE_NAME);

    let config = ServerConfig::from_env();
    info!("Starting Troyonix Quant API Server");
    info!(port = config.port, "HTTP Server: http://{}", config.bind_address());

    if let Err(e) = start_server(&config, shutdown_signal()).await {
        error!(error = %e, "HTTP server error");
        return Err(e);
    }

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down API server...");
}
