//! iCalendar export adapter - Implements `CalendarExportPort` with `icalendar`
//!
//! Each birthday becomes one all-day, yearly recurring, transparent `VEVENT`.
//! Every timestamp in the output comes from the record itself, so an
//! unchanged record always renders to the same bytes.

use std::sync::Arc;

use application::ports::{
    CalendarExportPort, ContactStorePort, ExportError, SpecialDateStorePort, StoreError,
};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use domain::{AccountId, Contact, SpecialDate, SpecialDateId};
use icalendar::{Calendar, Component, Property, ValueType};
use tracing::{debug, instrument};

use crate::config::ExportConfig;

/// Renders special dates as iCalendar text
pub struct IcalExportAdapter {
    special_dates: Arc<dyn SpecialDateStorePort>,
    contacts: Arc<dyn ContactStorePort>,
    config: ExportConfig,
}

impl std::fmt::Debug for IcalExportAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IcalExportAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl IcalExportAdapter {
    /// Create an adapter reading records from the given stores
    pub fn new(
        special_dates: Arc<dyn SpecialDateStorePort>,
        contacts: Arc<dyn ContactStorePort>,
        config: ExportConfig,
    ) -> Self {
        Self {
            special_dates,
            contacts,
            config,
        }
    }

    /// Render one birthday of `contact`
    pub fn render(&self, contact: &Contact, date: &SpecialDate) -> Result<String, ExportError> {
        let end = date.date.succ_opt().ok_or_else(|| {
            ExportError::Serialization(format!("no day after {}", date.date))
        })?;

        let mut event = icalendar::Event::new();
        event.uid(&date.uuid.to_string());
        event.summary(&self.config.summary.replace("{name}", &contact.name()));
        event.add_property("DTSTAMP", utc_stamp(date.updated_at));
        event.add_property("CREATED", utc_stamp(date.created_at));
        event.add_property("LAST-MODIFIED", utc_stamp(date.updated_at));
        add_date_property(&mut event, "DTSTART", date.date);
        add_date_property(&mut event, "DTEND", end);
        event.add_property("RRULE", yearly_rule(date.date));
        event.add_property("TRANSP", "TRANSPARENT");

        let mut calendar = Calendar::new();
        calendar.push(event.done());
        let calendar = calendar.done();

        Ok(with_prod_id(&calendar.to_string(), &self.config.prod_id))
    }

    fn map_error(error: StoreError) -> ExportError {
        match error {
            StoreError::Unavailable(msg) => ExportError::Failed(format!("store unavailable: {msg}")),
            StoreError::Query(msg) => ExportError::Failed(format!("store query failed: {msg}")),
        }
    }
}

#[async_trait]
impl CalendarExportPort for IcalExportAdapter {
    #[instrument(skip(self), fields(account_id = %account_id, special_date_id = %special_date_id))]
    async fn export(
        &self,
        account_id: AccountId,
        special_date_id: SpecialDateId,
    ) -> Result<String, ExportError> {
        let date = self
            .special_dates
            .find_by_id(account_id, special_date_id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| ExportError::NotFound(format!("special date {special_date_id}")))?;

        let contact = self
            .contacts
            .find_contact(account_id, date.contact_id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| ExportError::NotFound(format!("contact {}", date.contact_id)))?;

        let ics = self.render(&contact, &date)?;
        debug!(bytes = ics.len(), "Rendered birthday");
        Ok(ics)
    }
}

fn utc_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Leap-day birthdays fall back to the last day of February
fn yearly_rule(date: NaiveDate) -> &'static str {
    if date.month() == 2 && date.day() == 29 {
        "FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=-1"
    } else {
        "FREQ=YEARLY"
    }
}

fn add_date_property(event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

/// Set the calendar's `PRODID`, replacing the library default
fn with_prod_id(ics: &str, prod_id: &str) -> String {
    let prod_line = format!("PRODID:{prod_id}");
    let mut lines: Vec<&str> = ics
        .lines()
        .map(|line| {
            if line.starts_with("PRODID:") {
                prod_line.as_str()
            } else {
                line
            }
        })
        .collect();
    if !lines.contains(&prod_line.as_str()) {
        lines.insert(1.min(lines.len()), &prod_line);
    }

    let mut result = lines.join("\r\n");
    result.push_str("\r\n");
    result
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use domain::ContactId;
    use icalendar::{CalendarComponent, DatePerhapsTime, EventLike};

    use super::*;
    use crate::adapters::InMemoryDirectory;

    fn fixture() -> (Arc<InMemoryDirectory>, Contact, SpecialDate) {
        let account_id = AccountId::new();
        let contact = Contact::new(ContactId::new(), account_id, "Alice").with_last_name("Martin");
        let date = SpecialDate::new(
            SpecialDateId::new(7),
            account_id,
            contact.id,
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
        );
        let mut date = date.updated(Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap());
        date.created_at = Utc.with_ymd_and_hms(2020, 1, 15, 10, 0, 0).unwrap();
        let contact = contact.with_birthdate(date.clone());

        let directory = Arc::new(InMemoryDirectory::new());
        directory.add_contact(contact.clone());
        (directory, contact, date)
    }

    fn adapter(directory: &Arc<InMemoryDirectory>) -> IcalExportAdapter {
        IcalExportAdapter::new(
            directory.clone(),
            directory.clone(),
            ExportConfig::default(),
        )
    }

    #[test]
    fn renders_yearly_all_day_event() {
        let (directory, contact, date) = fixture();
        let ics = adapter(&directory).render(&contact, &date).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:-//Birthday CalDAV//Birthdays//EN\r\n"));
        assert!(!ics.contains("ICALENDAR-RS"));
        assert!(ics.contains(&format!("UID:{}\r\n", date.uuid)));
        assert!(ics.contains("SUMMARY:Birthday of Alice Martin\r\n"));
        assert!(ics.contains("DTSTART;VALUE=DATE:19901231\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:19910101\r\n"));
        assert!(ics.contains("RRULE:FREQ=YEARLY\r\n"));
        assert!(ics.contains("TRANSP:TRANSPARENT\r\n"));
        assert!(ics.contains("DTSTAMP:20240601T083000Z\r\n"));
        assert!(ics.contains("LAST-MODIFIED:20240601T083000Z\r\n"));
        assert!(ics.contains("CREATED:20200115T100000Z\r\n"));
    }

    #[test]
    fn output_parses_back() {
        let (directory, contact, date) = fixture();
        let ics = adapter(&directory).render(&contact, &date).unwrap();

        let calendar = ics.parse::<Calendar>().unwrap();
        let events: Vec<&icalendar::Event> = calendar
            .iter()
            .filter_map(|c| match c {
                CalendarComponent::Event(e) => Some(e),
                _ => None,
            })
            .collect();

        assert_eq!(events.len(), 1);
        let uid = date.uuid.to_string();
        assert_eq!(events[0].get_uid(), Some(uid.as_str()));
        assert!(matches!(
            events[0].get_start(),
            Some(DatePerhapsTime::Date(start)) if start == date.date
        ));
        assert_eq!(events[0].property_value("RRULE"), Some("FREQ=YEARLY"));
    }

    #[test]
    fn leap_day_birthday_recurs_every_year() {
        let (directory, contact, date) = fixture();
        let mut date = date;
        date.date = NaiveDate::from_ymd_opt(1992, 2, 29).unwrap();

        let ics = adapter(&directory).render(&contact, &date).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:19920229\r\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:19920301\r\n"));
        assert!(ics.contains("RRULE:FREQ=YEARLY;BYMONTH=2;BYMONTHDAY=-1\r\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (directory, contact, date) = fixture();
        let adapter = adapter(&directory);
        assert_eq!(
            adapter.render(&contact, &date).unwrap(),
            adapter.render(&contact, &date).unwrap()
        );
    }

    #[test]
    fn custom_summary_template() {
        let (directory, contact, date) = fixture();
        let adapter = IcalExportAdapter::new(
            directory.clone(),
            directory,
            ExportConfig {
                prod_id: "-//Test//EN".to_string(),
                summary: "Anniversaire de {name}".to_string(),
            },
        );
        let ics = adapter.render(&contact, &date).unwrap();
        assert!(ics.contains("SUMMARY:Anniversaire de Alice Martin\r\n"));
        assert!(ics.contains("PRODID:-//Test//EN\r\n"));
    }

    #[tokio::test]
    async fn export_looks_up_record_and_contact() {
        let (directory, contact, date) = fixture();
        let ics = adapter(&directory)
            .export(contact.account_id, date.id)
            .await
            .unwrap();
        assert!(ics.contains("SUMMARY:Birthday of Alice Martin"));
    }

    #[tokio::test]
    async fn export_of_unknown_record_is_not_found() {
        let (directory, contact, _) = fixture();
        let err = adapter(&directory)
            .export(contact.account_id, SpecialDateId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::NotFound(_)));
    }

    #[tokio::test]
    async fn export_is_scoped_to_account() {
        let (directory, _, date) = fixture();
        let err = adapter(&directory)
            .export(AccountId::new(), date.id)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::NotFound(_)));
    }

    #[test]
    fn store_errors_map_to_failed() {
        let err = IcalExportAdapter::map_error(StoreError::Unavailable("down".into()));
        assert!(matches!(err, ExportError::Failed(ref m) if m.contains("down")));
    }
}
