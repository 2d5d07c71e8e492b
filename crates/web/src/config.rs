//! UI configuration.
//!
//! Every field has a default, so an empty document (or none at all) yields the
//! stock page. Overrides come from a JSON string the host page may expose.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Page title shown in the header.
    pub title: String,
    pub home_heading: String,
    /// Label of the button that re-reads the clock.
    pub refresh_label: String,
    pub delete_label: String,
    /// Shown instead of the list once every product is deleted.
    pub empty_message: String,
    pub settings_message: String,
    /// `tracing` filter directive used when the page starts.
    pub log_filter: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Product Checker".to_string(),
            home_heading: "Homepage".to_string(),
            refresh_label: "Click me".to_string(),
            delete_label: "Delete".to_string(),
            empty_message: "No products are being tracked.".to_string(),
            settings_message: "Settings are not available yet.".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config =
            UiConfig::from_json(r#"{"title": "Stock Watch", "log_filter": "debug"}"#).unwrap();

        assert_eq!(config.title, "Stock Watch");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.refresh_label, "Click me");
        assert_eq!(config.delete_label, "Delete");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = UiConfig::from_json(r#"{"auto_refresh_secs": 1}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid ui config:"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        match UiConfig::from_json("{title:").unwrap_err() {
            ConfigError::Parse(_) => {}
        }
    }
}
