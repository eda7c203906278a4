//! Calendar export port
//!
//! Renders a single date record into serialized iCalendar text. The birthday
//! backend only carries and hashes the bytes; it never parses them.

use async_trait::async_trait;
use domain::{AccountId, SpecialDateId};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::error::ApplicationError;

/// Calendar export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record (or the contact it belongs to) does not exist
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The calendar could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Any other export failure
    #[error("Export failed: {0}")]
    Failed(String),
}

impl From<ExportError> for ApplicationError {
    fn from(err: ExportError) -> Self {
        Self::ExternalService(err.to_string())
    }
}

/// Port for the calendar export service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CalendarExportPort: Send + Sync {
    /// Export one special date of an account as serialized calendar text
    async fn export(
        &self,
        account_id: AccountId,
        special_date_id: SpecialDateId,
    ) -> Result<String, ExportError>;
}
