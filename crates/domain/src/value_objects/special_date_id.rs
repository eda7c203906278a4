//! Special date record identifier

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a special date record
///
/// This is the store's primary key and the `id` reported for a calendar
/// object. The public, URI-facing identity of a record is its UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialDateId(u64);

impl SpecialDateId {
    /// Wrap a raw record id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw record id
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SpecialDateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SpecialDateId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
