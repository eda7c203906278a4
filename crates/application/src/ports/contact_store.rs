//! Contact store port
//!
//! Read-only access to an account's contacts. The birthday backend never
//! mutates contacts.

use async_trait::async_trait;
use domain::{AccountId, Contact, ContactId};
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::error::ApplicationError;

/// Errors raised by contact and special date stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The query itself failed
    #[error("Query failed: {0}")]
    Query(String),
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::ExternalService(err.to_string())
    }
}

/// Which contacts a query should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFilter {
    /// Exclude placeholder (partial) contacts
    pub real_only: bool,
    /// Exclude archived contacts
    pub active_only: bool,
}

impl ContactFilter {
    /// Every contact of the account
    #[must_use]
    pub const fn all() -> Self {
        Self {
            real_only: false,
            active_only: false,
        }
    }

    /// Real (non-placeholder), active contacts only
    #[must_use]
    pub const fn real_and_active() -> Self {
        Self {
            real_only: true,
            active_only: true,
        }
    }

    /// Whether a contact passes this filter
    #[must_use]
    pub const fn matches(&self, contact: &Contact) -> bool {
        (!self.real_only || contact.is_real()) && (!self.active_only || contact.is_active)
    }
}

/// Port for querying contacts
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactStorePort: Send + Sync {
    /// List an account's contacts passing `filter`, in the store's natural order
    async fn contacts_for_account(
        &self,
        account_id: AccountId,
        filter: ContactFilter,
    ) -> Result<Vec<Contact>, StoreError>;

    /// Look up one contact of an account
    async fn find_contact(
        &self,
        account_id: AccountId,
        contact_id: ContactId,
    ) -> Result<Option<Contact>, StoreError>;
}
