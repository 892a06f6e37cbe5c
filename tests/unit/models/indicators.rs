//! Unit tests for indicator result rows

use serde_json::json;
use troyonix::models::indicators::{CrossoverEvent, CrossoverRow, RsiRow};

#[test]
fn test_crossover_event_from_signal_diff() {
    assert_eq!(CrossoverEvent::from_signal_diff(1), CrossoverEvent::Bullish);
    assert_eq!(CrossoverEvent::from_signal_diff(-1), CrossoverEvent::Bearish);
    assert_eq!(CrossoverEvent::from_signal_diff(0), CrossoverEvent::None);
    assert_eq!(CrossoverEvent::from_signal_diff(2), CrossoverEvent::None);
}

#[test]
fn test_crossover_row_serializes_event_as_integer() {
    let row = CrossoverRow {
        date: "2024-01-05".to_string(),
        price: 10.0,
        ma_short: 9.5,
        ma_long: 9.75,
        signal: 0,
        crossover: CrossoverEvent::Bearish,
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["crossover"], json!(-1));
    assert_eq!(value["signal"], json!(0));
}

#[test]
fn test_rsi_row_serializes_missing_value_as_null() {
    let row = RsiRow {
        date: None,
        price: 3.0,
        rsi: None,
    };

    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value, json!({ "price": 3.0, "rsi": null }));
}
