//! Special date entity - A notable date (a birthday) tied to a contact

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{AccountId, ContactId, SpecialDateId};

/// A date record owned by an account and attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDate {
    /// Store identifier
    pub id: SpecialDateId,
    /// Public identifier, used to build the object URI
    pub uuid: Uuid,
    /// Owning account
    pub account_id: AccountId,
    /// Contact the date belongs to
    pub contact_id: ContactId,
    /// The date itself; the year is meaningless when `is_year_unknown` is set
    pub date: NaiveDate,
    /// Date was derived from an age ("about 30 years old")
    pub is_age_based: bool,
    /// Only day and month are known
    pub is_year_unknown: bool,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl SpecialDate {
    /// Create an exact date record with a fresh UUID
    pub fn new(
        id: SpecialDateId,
        account_id: AccountId,
        contact_id: ContactId,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            uuid: Uuid::new_v4(),
            account_id,
            contact_id,
            date,
            is_age_based: false,
            is_year_unknown: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the year as unknown
    #[must_use]
    pub const fn with_unknown_year(mut self) -> Self {
        self.is_year_unknown = true;
        self
    }

    /// Mark the date as derived from an age
    #[must_use]
    pub const fn as_age_based(mut self) -> Self {
        self.is_age_based = true;
        self
    }

    /// Set an explicit UUID
    #[must_use]
    pub const fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }

    /// Set the update timestamp
    #[must_use]
    pub const fn updated(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Last modification as epoch seconds
    #[must_use]
    pub fn last_modified(&self) -> i64 {
        self.updated_at.timestamp()
    }
}
