use serde::Serialize;

/// Transition of the trend signal between two consecutive rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
pub enum CrossoverEvent {
    Bearish,
    None,
    Bullish,
}

impl CrossoverEvent {
    /// Collapse a signal difference into an event; anything but +1/-1 is `None`
    pub fn from_signal_diff(diff: i16) -> Self {
        match diff {
            1 => CrossoverEvent::Bullish,
            -1 => CrossoverEvent::Bearish,
            _ => CrossoverEvent::None,
        }
    }

    pub fn is_event(self) -> bool {
        self != CrossoverEvent::None
    }
}

impl From<CrossoverEvent> for i8 {
    fn from(event: CrossoverEvent) -> Self {
        match event {
            CrossoverEvent::Bearish => -1,
            CrossoverEvent::None => 0,
            CrossoverEvent::Bullish => 1,
        }
    }
}

/// One row of moving average crossover output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossoverRow {
    pub date: String,
    pub price: f64,
    pub ma_short: f64,
    pub ma_long: f64,
    /// 1 when the short average is above the long one, else 0
    pub signal: u8,
    pub crossover: CrossoverEvent,
}

/// One row of RSI output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub price: f64,
    /// `None` until the smoothing window has enough history
    pub rsi: Option<f64>,
}
