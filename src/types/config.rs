//! Configuration structures.
//!
//! Configuration is loaded from JSON documents; every section falls back to
//! its defaults when omitted.

use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)
            .map_err(|e| Error::config(format!("invalid config document: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.observability.validate()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error, off).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> Result<()> {
        if LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.log_level))
        {
            Ok(())
        } else {
            Err(Error::config(format!(
                "unknown log level: {}",
                self.log_level
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_default() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_json_str(r#"{"observability": {"json_logs": true}}"#).unwrap();
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.json_logs);
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let config = Config::from_json_str(r#"{"observability": {"log_level": "DEBUG"}}"#).unwrap();
        assert_eq!(config.observability.log_level, "DEBUG");
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = Config::from_json_str(r#"{"observability": {"log_level": "loud"}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = Config::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
