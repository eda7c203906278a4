//! Contact entity and its birthday state

use serde::{Deserialize, Serialize};

use crate::{
    entities::SpecialDate,
    value_objects::{AccountId, ContactId},
};

/// How precisely a contact's birthday is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthdayState {
    /// No birthdate recorded
    Unknown,
    /// Birthdate derived from an age, day and month are guesses
    Approximate,
    /// Day and month known, year unknown
    Almost,
    /// Full date known
    Exact,
}

impl BirthdayState {
    /// Wire name of the state
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Approximate => "approximate",
            Self::Almost => "almost",
            Self::Exact => "exact",
        }
    }
}

impl std::fmt::Display for BirthdayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact in an account's address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,
    /// Owning account
    pub account_id: AccountId,
    /// First name
    pub first_name: String,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Placeholder contact created as a relationship target, not a real person
    pub is_partial: bool,
    /// Whether the contact is active (not archived)
    pub is_active: bool,
    /// Birthdate record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<SpecialDate>,
}

impl Contact {
    /// Create a real, active contact without a birthdate
    pub fn new(id: ContactId, account_id: AccountId, first_name: impl Into<String>) -> Self {
        Self {
            id,
            account_id,
            first_name: first_name.into(),
            last_name: None,
            is_partial: false,
            is_active: true,
            birthdate: None,
        }
    }

    /// Set the last name
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Attach a birthdate record
    #[must_use]
    pub fn with_birthdate(mut self, birthdate: SpecialDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    /// Mark as a placeholder contact
    #[must_use]
    pub const fn as_partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    /// Mark as archived
    #[must_use]
    pub const fn archived(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether this is a real person rather than a placeholder
    #[must_use]
    pub const fn is_real(&self) -> bool {
        !self.is_partial
    }

    /// Full display name
    #[must_use]
    pub fn name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }

    /// Compute how precisely the birthday is known
    #[must_use]
    pub fn birthday_state(&self) -> BirthdayState {
        match &self.birthdate {
            None => BirthdayState::Unknown,
            Some(date) if date.is_age_based => BirthdayState::Approximate,
            Some(date) if date.is_year_unknown => BirthdayState::Almost,
            Some(_) => BirthdayState::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::value_objects::SpecialDateId;

    fn contact() -> Contact {
        Contact::new(ContactId::new(), AccountId::new(), "Alice")
    }

    fn birthdate(contact: &Contact) -> SpecialDate {
        SpecialDate::new(
            SpecialDateId::new(1),
            contact.account_id,
            contact.id,
            NaiveDate::from_ymd_opt(1985, 7, 3).unwrap(),
        )
    }

    #[test]
    fn no_birthdate_is_unknown() {
        assert_eq!(contact().birthday_state(), BirthdayState::Unknown);
    }

    #[test]
    fn full_date_is_exact() {
        let c = contact();
        let date = birthdate(&c);
        assert_eq!(c.with_birthdate(date).birthday_state(), BirthdayState::Exact);
    }

    #[test]
    fn unknown_year_is_almost() {
        let c = contact();
        let date = birthdate(&c).with_unknown_year();
        assert_eq!(c.with_birthdate(date).birthday_state(), BirthdayState::Almost);
    }

    #[test]
    fn age_based_wins_over_unknown_year() {
        let c = contact();
        let date = birthdate(&c).with_unknown_year().as_age_based();
        assert_eq!(
            c.with_birthdate(date).birthday_state(),
            BirthdayState::Approximate
        );
    }

    #[test]
    fn name_joins_first_and_last() {
        assert_eq!(contact().name(), "Alice");
        assert_eq!(contact().with_last_name("Martin").name(), "Alice Martin");
        assert_eq!(contact().with_last_name("").name(), "Alice");
    }

    #[test]
    fn partial_contacts_are_not_real() {
        assert!(contact().is_real());
        assert!(!contact().as_partial().is_real());
    }

    #[test]
    fn state_serializes_snake_case() {
        let json = serde_json::to_string(&BirthdayState::Almost).unwrap();
        assert_eq!(json, "\"almost\"");
        assert_eq!(BirthdayState::Exact.to_string(), "exact");
    }
}
