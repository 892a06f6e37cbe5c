//! Dual moving average crossover
//!
//! Signal is 1 while the short trailing mean is above the long one, 0
//! otherwise. A crossover is a change of that signal between two rows.

use crate::common::math;
use crate::config::{DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW};
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::{validate_row_count, validate_window};
use crate::models::indicators::{CrossoverEvent, CrossoverRow};
use crate::models::series::{PriceTable, CLOSE_COLUMN, DATE_COLUMN};

/// Parameters for [`moving_average_crossover`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossoverParams {
    pub short_window: usize,
    pub long_window: usize,
    pub price_column: String,
    pub date_column: String,
    /// Keep only rows where a crossover happened
    pub events_only: bool,
}

impl Default for CrossoverParams {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            price_column: CLOSE_COLUMN.to_string(),
            date_column: DATE_COLUMN.to_string(),
            events_only: false,
        }
    }
}

impl CrossoverParams {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short_window,
            long_window,
            ..Self::default()
        }
    }

    pub fn with_events_only(mut self, events_only: bool) -> Self {
        self.events_only = events_only;
        self
    }
}

/// Calculate moving average crossover signals.
///
/// Rows are sorted by date (stable, string order) before anything is
/// computed; the input table itself is left untouched. Both averages use a
/// trailing window that shrinks at the start of the series. The signal is
/// held at 0 for every row before `long_window`, whatever the averages say.
pub fn moving_average_crossover(
    table: &PriceTable,
    params: &CrossoverParams,
) -> IndicatorResult<Vec<CrossoverRow>> {
    validate_window("short_window", params.short_window)?;
    validate_window("long_window", params.long_window)?;

    let mut samples = table.samples(&params.date_column, &params.price_column)?;
    validate_row_count(
        samples.len(),
        params.short_window.max(params.long_window),
    )?;

    samples.sort_by(|a, b| a.date.cmp(&b.date));

    let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
    let ma_short = math::trailing_means(&prices, params.short_window);
    let ma_long = math::trailing_means(&prices, params.long_window);

    let mut previous_signal: Option<u8> = None;
    let rows = samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let signal = u8::from(i >= params.long_window && ma_short[i] > ma_long[i]);
            let crossover = match previous_signal {
                Some(prev) => CrossoverEvent::from_signal_diff(signal as i16 - prev as i16),
                None => CrossoverEvent::None,
            };
            previous_signal = Some(signal);

            CrossoverRow {
                date: sample.date,
                price: sample.price,
                ma_short: ma_short[i],
                ma_long: ma_long[i],
                signal,
                crossover,
            }
        });

    if params.events_only {
        Ok(rows.filter(|row| row.crossover.is_event()).collect())
    } else {
        Ok(rows.collect())
    }
}
