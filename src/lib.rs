//! Troyonix quant analytics.
//!
//! Moving average crossover and RSI calculations over caller-provided price
//! series, served over HTTP. For informational purposes only. Not financial
//! advice.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
