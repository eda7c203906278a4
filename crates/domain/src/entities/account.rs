//! Account entity - The identity a calendar collection is served for

use serde::{Deserialize, Serialize};

use crate::value_objects::{AccountId, EmailAddress, Timezone};

/// The account resolved for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier; scopes every contact and special date lookup
    pub id: AccountId,
    /// Display name of the account holder
    pub name: String,
    /// Email address, used to build the principal URI
    pub email: EmailAddress,
    /// Timezone reported for the account's calendars
    pub timezone: Timezone,
    /// Preferred locale (e.g. "en", "fr")
    pub locale: String,
}

impl Account {
    /// Create an account with UTC timezone and English locale
    pub fn new(id: AccountId, name: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            timezone: Timezone::utc(),
            locale: "en".to_string(),
        }
    }

    /// Set the timezone
    #[must_use]
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Set the locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// DAV principal URI of this account
    #[must_use]
    pub fn principal_uri(&self) -> String {
        format!("principals/{}", self.email)
    }
}
