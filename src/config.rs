//! Environment-driven configuration and indicator defaults

use std::env;

/// Default short moving average window
pub const DEFAULT_SHORT_WINDOW: usize = 20;

/// Default long moving average window
pub const DEFAULT_LONG_WINDOW: usize = 50;

/// Default RSI window
pub const DEFAULT_RSI_WINDOW: usize = 14;

/// Rows returned by the crossover endpoint when not in events-only mode
pub const CROSSOVER_TAIL_ROWS: usize = 20;

/// Disclaimer attached to every calculation response
pub const DISCLAIMER: &str = "For informational purposes only. Not financial advice.";

/// Deployment environment name (`ENVIRONMENT`, defaults to `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .ok()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Whether the environment name denotes production
pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT`, keeping defaults for missing or unparsable values
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok().as_deref(), env::var("PORT").ok().as_deref())
    }

    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            host: host
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.host),
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
