//! Logging configuration

use serde::{Deserialize, Serialize};

use crate::telemetry::{LogFormat, TelemetryConfig};

/// Logging configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Log level filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// `text` or `json`
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl From<&TelemetryAppConfig> for TelemetryConfig {
    fn from(config: &TelemetryAppConfig) -> Self {
        Self {
            log_filter: config.log_filter.clone(),
            log_format: config.log_format,
            ..Self::default()
        }
    }
}
