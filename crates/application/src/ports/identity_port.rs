//! Identity port
//!
//! Resolves the account a request acts for. Failures propagate to the
//! protocol engine; the backend never recovers from them.

use async_trait::async_trait;
use domain::Account;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::{error::ApplicationError, request_context::RequestContext};

/// Identity port errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The request carries no authenticated identity
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The account referenced by the request does not exist
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The identity provider could not be reached
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

impl From<IdentityError> for ApplicationError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::NotAuthenticated | IdentityError::AccountNotFound(_) => {
                Self::NotAuthorized(err.to_string())
            },
            IdentityError::Unavailable(_) => Self::ExternalService(err.to_string()),
        }
    }
}

/// Port for resolving the current account
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Resolve the account (id, display name, timezone, ...) for this request
    async fn current_account(&self, ctx: &RequestContext) -> Result<Account, IdentityError>;
}
