//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;

pub use indicators::{CrossoverEvent, CrossoverRow, RsiRow};
pub use series::{PriceSample, PriceTable, CLOSE_COLUMN, DATE_COLUMN};
