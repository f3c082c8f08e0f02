use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; the defaults suit a local demo run.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub latency_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("FOLIO_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };
        Ok(Config {
            data_dir,
            latency_ms: std::env::var("FOLIO_LATENCY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<u64>()
                .context("FOLIO_LATENCY_MS must be a number of milliseconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Simulated backend latency as a [`Duration`].
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Platform data directory plus `folio`, or `.folio` under the working
/// directory when the platform offers none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("folio"))
        .unwrap_or_else(|| PathBuf::from(".folio"))
}
