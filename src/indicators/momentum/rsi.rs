//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::config::DEFAULT_RSI_WINDOW;
use crate::indicators::error::IndicatorResult;
use crate::indicators::validation::{validate_row_count, validate_window};
use crate::models::indicators::RsiRow;
use crate::models::series::{PriceTable, CLOSE_COLUMN, DATE_COLUMN};

/// Calculate RSI for every row of `table`.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are averaged with Wilder smoothing (`alpha = 1 / window`).
/// Rows keep the caller's order: unlike the crossover, this does not sort by
/// date. The first `window` rows have no RSI. A zero average loss gives 100.
pub fn calculate_rsi(
    table: &PriceTable,
    price_column: &str,
    window: usize,
) -> IndicatorResult<Vec<RsiRow>> {
    validate_window("window", window)?;
    let prices = table.numeric_column(price_column)?;
    validate_row_count(prices.len(), window)?;

    let dates = table.text_column(DATE_COLUMN).ok();

    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|w| {
            let delta = w[1] - w[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let avg_gains = math::wilder_smoothing(&gains, window);
    let avg_losses = math::wilder_smoothing(&losses, window);

    Ok(prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            // Row i >= 1 corresponds to delta observation i - 1.
            let rsi = i
                .checked_sub(1)
                .and_then(|j| Some((avg_gains[j]?, avg_losses[j]?)))
                .map(|(avg_gain, avg_loss)| rsi_from_averages(avg_gain, avg_loss));

            RsiRow {
                date: dates.map(|d| d[i].clone()),
                price,
                rsi,
            }
        })
        .collect())
}

/// Calculate RSI on the `close` column with the default window (14)
pub fn calculate_rsi_default(table: &PriceTable) -> IndicatorResult<Vec<RsiRow>> {
    calculate_rsi(table, CLOSE_COLUMN, DEFAULT_RSI_WINDOW)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
