//! Logging setup
//!
//! Installs the global `tracing` subscriber used by every layer.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
