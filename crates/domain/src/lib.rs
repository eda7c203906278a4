//! Domain layer for the birthday calendar
//!
//! Contains accounts, contacts and the special dates (birthdays) attached to
//! them, together with the value objects and errors they share.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
