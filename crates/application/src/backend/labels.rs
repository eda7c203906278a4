//! Localized collection labels

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Display name and description of a collection in one language
///
/// `description` may contain a `{name}` placeholder for the account name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLabels {
    pub display_name: String,
    pub description: String,
}

impl CollectionLabels {
    pub fn new(display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
        }
    }

    /// Description with `{name}` replaced by `name`
    #[must_use]
    pub fn describe(&self, name: &str) -> String {
        self.description.replace("{name}", name)
    }
}

impl Default for CollectionLabels {
    fn default() -> Self {
        Self::new("Birthdays", "Birthdays of {name}'s contacts")
    }
}

/// Labels keyed by locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCatalog {
    default_locale: String,
    labels: HashMap<String, CollectionLabels>,
    fallback: CollectionLabels,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LabelCatalog {
    /// Create an empty catalog
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: normalize(&default_locale.into()),
            labels: HashMap::new(),
            fallback: CollectionLabels::default(),
        }
    }

    /// Register labels for a locale
    #[must_use]
    pub fn with_labels(mut self, locale: &str, labels: CollectionLabels) -> Self {
        self.labels.insert(normalize(locale), labels);
        self
    }

    /// Default locale of the catalog
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Labels for `locale`
    ///
    /// Tries the exact locale, then its language part (`fr-CA` → `fr`), then
    /// the default locale, then the built-in English labels.
    #[must_use]
    pub fn resolve(&self, locale: &str) -> &CollectionLabels {
        let locale = normalize(locale);
        let language = locale.split('-').next().unwrap_or_default();

        self.labels
            .get(&locale)
            .or_else(|| self.labels.get(language))
            .or_else(|| self.labels.get(&self.default_locale))
            .unwrap_or(&self.fallback)
    }
}

fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_lowercase()
}
