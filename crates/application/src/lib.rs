//! Application layer - Calendar backends and the ports they drive
//!
//! Exposes the `CalendarBackend` capability consumed by a calendar protocol
//! engine, the birthday backend that implements it, and the port traits for
//! identity, contact storage and calendar export that adapters fulfil.

pub mod backend;
pub mod error;
pub mod ports;
pub mod request_context;
pub mod services;

pub use backend::*;
pub use error::ApplicationError;
pub use ports::*;
pub use request_context::RequestContext;
pub use services::*;
