//! Birthday collection configuration

use std::collections::BTreeMap;

use application::{CollectionLabels, LabelCatalog};
use serde::{Deserialize, Serialize};

/// Labels for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Collection display name
    pub display_name: String,
    /// Collection description; `{name}` is replaced by the account name
    pub description: String,
}

/// Birthday collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdaysConfig {
    /// Locale used when an account's locale has no labels
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Labels keyed by locale (e.g. `en`, `fr`, `pt-br`)
    #[serde(default)]
    pub labels: BTreeMap<String, LabelsConfig>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            labels: BTreeMap::new(),
        }
    }
}

impl BirthdaysConfig {
    /// Build the label catalog used by the birthday backend
    #[must_use]
    pub fn catalog(&self) -> LabelCatalog {
        self.labels.iter().fold(
            LabelCatalog::new(self.default_locale.as_str()),
            |catalog, (locale, labels)| {
                catalog.with_labels(
                    locale,
                    CollectionLabels::new(labels.display_name.as_str(), labels.description.as_str()),
                )
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_builtin_labels() {
        let catalog = BirthdaysConfig::default().catalog();
        assert_eq!(catalog.default_locale(), "en");
        assert_eq!(catalog.resolve("en"), &CollectionLabels::default());
    }

    #[test]
    fn catalog_contains_configured_locales() {
        let mut config = BirthdaysConfig::default();
        config.labels.insert(
            "de".to_string(),
            LabelsConfig {
                display_name: "Geburtstage".to_string(),
                description: "Geburtstage der Kontakte von {name}".to_string(),
            },
        );

        let catalog = config.catalog();
        let labels = catalog.resolve("de_AT");
        assert_eq!(labels.display_name, "Geburtstage");
        assert_eq!(labels.describe("Jan"), "Geburtstage der Kontakte von Jan");
        assert_eq!(catalog.resolve("en").display_name, "Birthdays");
    }
}
