//! Timezone value object

use std::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An IANA timezone name, as reported in a collection's `calendar-timezone`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timezone(String);

impl Timezone {
    /// Wrap a timezone name without checking it against the IANA database
    ///
    /// Use this for values that come from a trusted store. Use [`Self::parse`]
    /// for user input.
    #[must_use]
    pub fn new(tz: impl Into<String>) -> Self {
        Self(tz.into())
    }

    /// Parse and validate a timezone name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimezone`] for names unknown to `chrono-tz`.
    pub fn parse(tz: &str) -> Result<Self, DomainError> {
        let tz = tz.trim();
        tz.parse::<Tz>()
            .map(|parsed| Self(parsed.name().to_string()))
            .map_err(|_| DomainError::InvalidTimezone(tz.to_string()))
    }

    /// Get the timezone name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve to a `chrono-tz` zone, if the name is known
    #[must_use]
    pub fn to_tz(&self) -> Option<Tz> {
        self.0.parse().ok()
    }

    /// UTC timezone
    #[must_use]
    pub fn utc() -> Self {
        Self("UTC".to_string())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timezone {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
