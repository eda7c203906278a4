//! Request context carrying the authenticated account through every backend call
//!
//! The protocol engine builds a `RequestContext` once authentication has
//! resolved an account and hands it to each backend operation. Nothing in the
//! application layer reads ambient session state.
//!
//! # Examples
//!
//! ```
//! use application::RequestContext;
//! use domain::AccountId;
//!
//! let account_id = AccountId::new();
//! let ctx = RequestContext::new(account_id);
//!
//! assert_eq!(ctx.account_id(), account_id);
//! assert!(!ctx.request_id().is_nil());
//! ```

use chrono::{DateTime, Utc};
use domain::AccountId;
use uuid::Uuid;

/// Context for a single request
///
/// - `account_id`: the account the request acts for
/// - `request_id`: a unique identifier for tracing/logging
/// - `timestamp`: when the request was received
#[derive(Debug, Clone)]
pub struct RequestContext {
    account_id: AccountId,
    request_id: Uuid,
    timestamp: DateTime<Utc>,
}

impl RequestContext {
    /// Create a new request context for the given account
    ///
    /// Generates a new random request ID and captures the current timestamp.
    #[must_use]
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    /// Create a request context with a request ID supplied by the caller
    ///
    /// Useful when the protocol engine already assigned a correlation ID.
    #[must_use]
    pub fn with_request_id(account_id: AccountId, request_id: Uuid) -> Self {
        Self {
            account_id,
            request_id,
            timestamp: Utc::now(),
        }
    }

    /// Get the account this request acts for
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Get the unique request identifier
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Get the timestamp when the request was received
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
