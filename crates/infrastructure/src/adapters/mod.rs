//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod ical_export_adapter;
mod in_memory_directory;

pub use ical_export_adapter::IcalExportAdapter;
pub use in_memory_directory::InMemoryDirectory;
