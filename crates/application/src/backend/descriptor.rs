//! Collection descriptors
//!
//! A descriptor is the property map the protocol engine renders into
//! PROPFIND responses. Keys use Clark notation (`{namespace}name`); the engine
//! decides how each typed value is serialized.

use std::collections::BTreeMap;

use domain::Account;
use serde::Serialize;

/// Well-known property names
pub mod property {
    /// Collection identifier (shared base metadata)
    pub const ID: &str = "id";
    /// Collection URI (shared base metadata)
    pub const URI: &str = "uri";
    /// Owning principal (shared base metadata)
    pub const PRINCIPAL_URI: &str = "principaluri";

    /// `DAV:displayname`
    pub const DISPLAY_NAME: &str = "{DAV:}displayname";
    /// SabreDAV read-only marker
    pub const READ_ONLY: &str = "{http://sabredav.org/ns}read-only";
    /// `CALDAV:calendar-description`
    pub const CALENDAR_DESCRIPTION: &str = "{urn:ietf:params:xml:ns:caldav}calendar-description";
    /// `CALDAV:calendar-timezone`
    pub const CALENDAR_TIMEZONE: &str = "{urn:ietf:params:xml:ns:caldav}calendar-timezone";
    /// `CALDAV:supported-calendar-component-set`
    pub const SUPPORTED_COMPONENT_SET: &str =
        "{urn:ietf:params:xml:ns:caldav}supported-calendar-component-set";
    /// `CALDAV:schedule-calendar-transp`
    pub const SCHEDULE_CALENDAR_TRANSP: &str =
        "{urn:ietf:params:xml:ns:caldav}schedule-calendar-transp";
}

/// iCalendar component types a collection may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComponentType {
    #[serde(rename = "VEVENT")]
    Event,
    #[serde(rename = "VTODO")]
    Todo,
    #[serde(rename = "VJOURNAL")]
    Journal,
}

impl ComponentType {
    /// iCalendar component name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
        }
    }
}

/// Whether a calendar's events count against free/busy time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTransparency {
    /// Events block scheduling
    Opaque,
    /// Events never block scheduling
    Transparent,
}

/// A typed descriptor value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DescriptorValue {
    Text(String),
    Flag(bool),
    ComponentSet(Vec<ComponentType>),
    Transparency(ScheduleTransparency),
}

impl From<&str> for DescriptorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DescriptorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for DescriptorValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Ordered property map describing a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CollectionDescriptor(BTreeMap<String, DescriptorValue>);

impl CollectionDescriptor {
    /// Create an empty descriptor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<DescriptorValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Add the properties of `other` that are not already present
    ///
    /// Existing keys win, so base metadata cannot be overridden by a backend.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        for (name, value) in other.0 {
            self.0.entry(name).or_insert(value);
        }
        self
    }

    /// Look up a property
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DescriptorValue> {
        self.0.get(name)
    }

    /// Look up a text property
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(DescriptorValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Look up a flag property
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.0.get(name) {
            Some(DescriptorValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }

    /// Number of properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DescriptorValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Metadata every collection shares: its id, URI and owning principal
#[must_use]
pub fn base_descriptor(collection_uri: &str, account: &Account) -> CollectionDescriptor {
    CollectionDescriptor::new()
        .with(property::ID, collection_uri)
        .with(property::URI, collection_uri)
        .with(property::PRINCIPAL_URI, account.principal_uri())
}
