//! Calendar export configuration

use serde::{Deserialize, Serialize};

/// iCalendar output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// `PRODID` of produced calendars
    #[serde(default = "default_prod_id")]
    pub prod_id: String,

    /// Event summary template; `{name}` is replaced by the contact name
    #[serde(default = "default_summary")]
    pub summary: String,
}

fn default_prod_id() -> String {
    "-//Birthday CalDAV//Birthdays//EN".to_string()
}

fn default_summary() -> String {
    "Birthday of {name}".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prod_id: default_prod_id(),
            summary: default_summary(),
        }
    }
}
