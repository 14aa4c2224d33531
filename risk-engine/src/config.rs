//! Configuration for the risk scoring engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::{Error, Locale, Result};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config(format!("unknown log format: {}", other))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Risk engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Language of labels, recommendations and descriptions
    pub locale: Locale,

    /// Log filter used when `RUST_LOG` is unset, in `RUST_LOG` directive syntax
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "risk-engine".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            locale: Locale::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(locale) = std::env::var("RISK_ENGINE_LOCALE") {
            config.locale = locale.parse()?;
        }

        if let Ok(level) = std::env::var("RISK_ENGINE_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Ok(format) = std::env::var("RISK_ENGINE_LOG_FORMAT") {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(Error::Config("service name cannot be empty".to_string()));
        }

        EnvFilter::try_new(&self.log_level)
            .map_err(|e| Error::Config(format!("invalid log filter {}: {}", self.log_level, e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "risk-engine");
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            locale = "en"
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("risk-engine-config-{}.toml", std::process::id()));
        std::fs::write(&path, "service_name = \"assessments\"\nlog_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.service_name, "assessments");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        let config = Config {
            log_level: "info=verbose".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            service_name: " ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_filter_directives_accepted() {
        let config = Config {
            log_level: "risk_engine=debug,warn".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            log_level: "risk_engine=loud".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("/nonexistent/risk-engine.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
