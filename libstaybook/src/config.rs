//! Configuration management for Staybook

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::booking::{BookingPolicy, DatePolicy};
use crate::catalog::DEFAULT_HOTEL_ID;
use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub booking: BookingConfig,
    pub tui: TuiConfig,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub date_policy: DatePolicy,
    pub require_selections: bool,
    /// Display-only prefix shown in front of the phone number
    pub country_code: String,
    pub default_hotel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
    pub colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file for the TUI; tilde-expanded
    pub file: Option<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            date_policy: DatePolicy::default(),
            require_selections: false,
            country_code: "+1".to_string(),
            default_hotel: DEFAULT_HOTEL_ID.to_string(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl BookingConfig {
    /// Policy handed to each new booking session
    pub fn policy(&self) -> BookingPolicy {
        BookingPolicy {
            dates: self.date_policy,
            require_selections: self.require_selections,
        }
    }
}

impl LogSettings {
    /// Configured log file with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// An explicit `STAYBOOK_CONFIG` path must exist. The default path is
    /// optional; when it is absent the built-in defaults are used.
    pub fn load() -> Result<Self> {
        if std::env::var_os("STAYBOOK_CONFIG").is_some() {
            let config_path = resolve_config_path()?;
            return Self::load_from_path(&config_path);
        }

        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory conventions
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("STAYBOOK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("staybook").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory conventions
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("staybook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaybookError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.booking.date_policy, DatePolicy::Clamp);
        assert!(!config.booking.require_selections);
        assert_eq!(config.booking.country_code, "+1");
        assert_eq!(config.booking.default_hotel, "golden-sands");
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[booking]
date_policy = "reject"
require_selections = true
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.booking.date_policy, DatePolicy::Reject);
        assert!(config.booking.require_selections);
        assert_eq!(config.booking.country_code, "+1");
        assert_eq!(config.tui, TuiConfig::default());

        let policy = config.booking.policy();
        assert_eq!(policy.dates, DatePolicy::Reject);
        assert!(policy.require_selections);
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[booking]
date_policy = "permissive"
country_code = "+44"
default_hotel = "palm-grove-hideaway"

[tui]
tick_rate_ms = 250
colors = false

[logging]
format = "json"
level = "debug"
file = "/tmp/staybook.log"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.booking.date_policy, DatePolicy::Permissive);
        assert_eq!(config.booking.country_code, "+44");
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert!(!config.tui.colors);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("/tmp/staybook.log"))
        );
    }

    #[test]
    fn test_load_invalid_policy_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[booking]\ndate_policy = \"sometimes\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(
            err,
            StaybookError::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, StaybookError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[tui]\ntick_rate_ms = 42\n").unwrap();

        std::env::set_var("STAYBOOK_CONFIG", &path);
        assert_eq!(resolve_config_path().unwrap(), path);
        let config = Config::load().unwrap();
        std::env::remove_var("STAYBOOK_CONFIG");

        assert_eq!(config.tui.tick_rate_ms, 42);
    }

    #[test]
    #[serial]
    fn test_env_override_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var("STAYBOOK_CONFIG", temp_dir.path().join("nope.toml"));
        let result = Config::load();
        std::env::remove_var("STAYBOOK_CONFIG");

        assert!(result.is_err());
    }
}
