//! Port definitions for application layer
//!
//! Ports are interfaces that define how the birthday backend reaches the
//! systems it does not own: identity resolution, contact storage and calendar
//! export. Adapters in the infrastructure layer implement these ports.

mod calendar_export_port;
mod contact_store;
mod identity_port;
mod special_date_store;

pub use calendar_export_port::{CalendarExportPort, ExportError};
#[cfg(test)]
pub use calendar_export_port::MockCalendarExportPort;
pub use contact_store::{ContactFilter, ContactStorePort, StoreError};
#[cfg(test)]
pub use contact_store::MockContactStorePort;
pub use identity_port::{IdentityError, IdentityPort};
#[cfg(test)]
pub use identity_port::MockIdentityPort;
pub use special_date_store::SpecialDateStorePort;
#[cfg(test)]
pub use special_date_store::MockSpecialDateStorePort;
