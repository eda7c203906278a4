//! Tracing subscriber initialization
//!
//! Console logging through `tracing-subscriber`, as human-readable text or
//! one JSON object per line.

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "application=debug,infrastructure=info")
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Include the event target (module path)
    #[serde(default = "default_true")]
    pub with_target: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            with_target: true,
        }
    }
}

/// Install the global subscriber
///
/// Fails if a global subscriber is already set.
///
/// # Example
///
/// ```ignore
/// use infrastructure::telemetry::{TelemetryConfig, init_telemetry};
///
/// init_telemetry(&TelemetryConfig::default())?;
/// ```
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let (text_layer, json_layer) = match config.log_format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_target(config.with_target)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = ?config.log_format, filter = %config.log_filter, "Logging initialized");
    Ok(())
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), &config.log_filter)
}

/// A valid `RUST_LOG` wins over the configured filter
fn filter_from(from_env: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = from_env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).map_err(|e| TelemetryError::Filter(format!("{configured}: {e}")))
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// The configured filter directive is invalid
    #[error("Invalid log filter: {0}")]
    Filter(String),
}
