//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: an iCalendar exporter
//! and an in-memory directory of accounts and contacts. Also owns
//! configuration loading and logging setup, and wires everything into a
//! ready-to-serve birthday collection.

pub mod adapters;
pub mod config;
pub mod telemetry;
mod wiring;

pub use adapters::*;
pub use config::{AppConfig, BirthdaysConfig, ExportConfig, LabelsConfig, TelemetryAppConfig};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
pub use wiring::birthday_collection;
