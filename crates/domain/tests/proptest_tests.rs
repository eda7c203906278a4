//! Property-based tests for domain entities and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::NaiveDate;
use domain::{AccountId, BirthdayState, Contact, ContactId, SpecialDate, SpecialDateId, Timezone};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

// ============================================================================
// Birthday state
// ============================================================================

mod birthday_state_tests {
    use super::*;

    proptest! {
        #[test]
        fn state_follows_record_flags(
            has_date in any::<bool>(),
            age_based in any::<bool>(),
            year_unknown in any::<bool>(),
            date in arb_date(),
        ) {
            let mut contact = Contact::new(ContactId::new(), AccountId::new(), "Someone");
            if has_date {
                let mut record = SpecialDate::new(
                    SpecialDateId::new(1),
                    contact.account_id,
                    contact.id,
                    date,
                );
                record.is_age_based = age_based;
                record.is_year_unknown = year_unknown;
                contact = contact.with_birthdate(record);
            }

            let expected = match (has_date, age_based, year_unknown) {
                (false, _, _) => BirthdayState::Unknown,
                (true, true, _) => BirthdayState::Approximate,
                (true, false, true) => BirthdayState::Almost,
                (true, false, false) => BirthdayState::Exact,
            };
            prop_assert_eq!(contact.birthday_state(), expected);
        }

        #[test]
        fn state_does_not_depend_on_activity(
            partial in any::<bool>(),
            active in any::<bool>(),
            date in arb_date(),
        ) {
            let contact = Contact::new(ContactId::new(), AccountId::new(), "Someone");
            let record = SpecialDate::new(SpecialDateId::new(9), contact.account_id, contact.id, date);
            let mut contact = contact.with_birthdate(record);
            contact.is_partial = partial;
            contact.is_active = active;
            prop_assert_eq!(contact.birthday_state(), BirthdayState::Exact);
        }
    }
}

// ============================================================================
// Timezone
// ============================================================================

mod timezone_tests {
    use super::*;

    proptest! {
        #[test]
        fn every_iana_zone_parses(index in 0usize..chrono_tz::TZ_VARIANTS.len()) {
            let name = chrono_tz::TZ_VARIANTS[index].name();
            let tz = Timezone::parse(name);
            prop_assert!(tz.is_ok());
            let tz = tz.unwrap();
            prop_assert_eq!(tz.as_str(), name);
        }

        #[test]
        fn lowercase_garbage_is_rejected(name in "[a-z]{3,12}/[a-z]{3,12}") {
            prop_assert!(Timezone::parse(&name).is_err());
        }
    }
}
