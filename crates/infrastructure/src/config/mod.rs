//! Application configuration
//!
//! Split into focused sub-modules:
//! - `birthdays`: collection labels per locale
//! - `export`: iCalendar output settings
//! - `telemetry`: log filter and format

mod birthdays;
mod export;
mod telemetry;

use serde::{Deserialize, Serialize};

pub use birthdays::{BirthdaysConfig, LabelsConfig};
pub use export::ExportConfig;
pub use telemetry::TelemetryAppConfig;

/// Environment variable prefix (e.g. `BDAYCAL_TELEMETRY__LOG_FILTER`)
pub const ENV_PREFIX: &str = "BDAYCAL";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// Birthday collection configuration
    #[serde(default)]
    pub birthdays: BirthdaysConfig,

    /// Calendar export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Reads `config.toml` (or any format `config` recognizes under the name
    /// `config`) from the working directory when present, then applies
    /// `BDAYCAL_` environment variables. Nested keys are separated by `__`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder(config::File::with_name("config").required(false), None)
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        Self::builder(config::File::from(path), None)
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from TOML text, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// `env` replaces the process environment when given
    fn builder<S>(
        file: S,
        env: Option<config::Map<String, String>>,
    ) -> config::ConfigBuilder<config::builder::DefaultState>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder().add_source(file).add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config.telemetry.log_filter, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
        assert_eq!(config.birthdays.default_locale, "en");
        assert!(config.birthdays.labels.is_empty());
        assert_eq!(config.export.prod_id, "-//Birthday CalDAV//Birthdays//EN");
        assert_eq!(config.export.summary, "Birthday of {name}");
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [telemetry]
            log_filter = "application=debug"
            log_format = "json"

            [birthdays]
            default_locale = "fr"

            [birthdays.labels.fr]
            display_name = "Anniversaires"
            description = "Anniversaires des contacts de {name}"

            [export]
            prod_id = "-//Example//Birthdays//FR"
            summary = "Anniversaire de {name}"
            "#,
        )
        .unwrap();

        assert_eq!(config.telemetry.log_filter, "application=debug");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.birthdays.default_locale, "fr");
        assert_eq!(
            config.birthdays.labels["fr"].display_name,
            "Anniversaires"
        );
        assert_eq!(config.export.summary, "Anniversaire de {name}");

        let catalog = config.birthdays.catalog();
        assert_eq!(catalog.resolve("de").display_name, "Anniversaires");
    }

    #[test]
    fn invalid_value_is_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [telemetry]
            log_format = "yaml"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[export]\nsummary = \"{{name}}'s birthday\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.export.summary, "{name}'s birthday");
    }

    #[test]
    fn load_without_file_succeeds() {
        // No config.toml in the crate directory
        let config = AppConfig::load().unwrap();
        assert!(!config.export.prod_id.is_empty());
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[export]\nsummary = \"From file\"\nprod_id = \"-//File//EN\"\n\n[telemetry]\nlog_format = \"text\""
        )
        .unwrap();

        let env = config::Map::from([
            ("BDAYCAL_EXPORT__SUMMARY".to_string(), "From env {name}".to_string()),
            ("BDAYCAL_TELEMETRY__LOG_FORMAT".to_string(), "json".to_string()),
            ("BDAYCAL_BIRTHDAYS__DEFAULT_LOCALE".to_string(), "de".to_string()),
            ("OTHER_EXPORT__SUMMARY".to_string(), "ignored".to_string()),
        ]);
        let config: AppConfig = AppConfig::builder(config::File::from(file.path()), Some(env))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.export.summary, "From env {name}");
        assert_eq!(config.export.prod_id, "-//File//EN");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.birthdays.default_locale, "de");
    }
}
