//! Trend indicators: moving average crossover

pub mod crossover;

pub use crossover::*;
