//! Calendar objects handed to the protocol engine

use bytes::Bytes;
use serde::Serialize;

/// Quoted hex MD5 digest of calendar data
#[must_use]
pub fn etag_for(calendar_data: &[u8]) -> String {
    format!("\"{:x}\"", md5::compute(calendar_data))
}

/// Metadata and payload of one calendar object
///
/// The etag is derived from the payload on construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarObject {
    id: u64,
    uri: String,
    #[serde(serialize_with = "serialize_utf8")]
    calendar_data: Bytes,
    etag: String,
    last_modified: i64,
}

fn serialize_utf8<S: serde::Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(data))
}

impl CalendarObject {
    /// Build an object, hashing `calendar_data` into its etag
    pub fn new(
        id: u64,
        uri: impl Into<String>,
        calendar_data: impl Into<Bytes>,
        last_modified: i64,
    ) -> Self {
        let calendar_data = calendar_data.into();
        let etag = etag_for(&calendar_data);
        Self {
            id,
            uri: uri.into(),
            calendar_data,
            etag,
            last_modified,
        }
    }

    /// Store id of the underlying record
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Object URI within the collection
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Serialized calendar payload
    #[must_use]
    pub const fn calendar_data(&self) -> &Bytes {
        &self.calendar_data
    }

    /// Quoted content hash of the payload
    #[must_use]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Last modification as epoch seconds
    #[must_use]
    pub const fn last_modified(&self) -> i64 {
        self.last_modified
    }

    /// Payload size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.calendar_data.len()
    }
}

/// Why a record produced no calendar object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The export service failed; carries its error text
    ExportFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExportFailed(reason) => write!(f, "export failed: {reason}"),
        }
    }
}

/// Outcome of preparing one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedObject {
    /// The record was rendered
    Ready(CalendarObject),
    /// The record was left out of the collection
    Skipped(SkipReason),
}

impl PreparedObject {
    /// The object, or `None` when the record was skipped
    #[must_use]
    pub fn into_object(self) -> Option<CalendarObject> {
        match self {
            Self::Ready(object) => Some(object),
            Self::Skipped(_) => None,
        }
    }

    /// Whether the record was skipped
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_quoted_md5_hex() {
        // md5("") is the well-known empty digest
        assert_eq!(etag_for(b""), "\"d41d8cd98f00b204e9800998ecf8427e\"");
    }

    #[test]
    fn object_derives_etag_from_payload() {
        let object = CalendarObject::new(7, "abc.ics", "BEGIN:VCALENDAR", 1_700_000_000);

        assert_eq!(object.id(), 7);
        assert_eq!(object.uri(), "abc.ics");
        assert_eq!(object.etag(), etag_for(b"BEGIN:VCALENDAR"));
        assert_eq!(object.size(), 15);
        assert_eq!(object.last_modified(), 1_700_000_000);
    }

    #[test]
    fn serializes_payload_as_text() {
        let object = CalendarObject::new(3, "b.ics", "BEGIN:VCALENDAR\r\n", 42);
        let json = serde_json::to_value(&object).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["uri"], "b.ics");
        assert_eq!(json["calendar_data"], "BEGIN:VCALENDAR\r\n");
        assert_eq!(json["etag"], etag_for(b"BEGIN:VCALENDAR\r\n"));
        assert_eq!(json["last_modified"], 42);
    }

    #[test]
    fn skipped_has_no_object() {
        let skipped = PreparedObject::Skipped(SkipReason::ExportFailed("boom".into()));
        assert!(skipped.is_skipped());
        assert!(skipped.into_object().is_none());
    }

    #[test]
    fn ready_yields_object() {
        let object = CalendarObject::new(1, "a.ics", "data", 0);
        let prepared = PreparedObject::Ready(object.clone());
        assert!(!prepared.is_skipped());
        assert_eq!(prepared.into_object(), Some(object));
    }

    #[test]
    fn skip_reason_display() {
        assert_eq!(
            SkipReason::ExportFailed("no contact".into()).to_string(),
            "export failed: no contact"
        );
    }
}
