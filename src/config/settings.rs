//! User settings for Baby Accounts
//!
//! Holds the backend location, request timeout and display preferences.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::AccountsPaths;
use crate::error::AccountsError;

/// Default backend API root, matching the development server
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";

/// User settings for Baby Accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Root of the REST API (resources live directly below it)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of rows `transaction list` shows when no limit is given
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            request_timeout_secs: default_timeout(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_limit: default_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AccountsPaths) -> Result<Self, AccountsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AccountsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AccountsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, replacing an unreadable file with defaults
    ///
    /// Used by the config commands, which must be able to repair a broken
    /// file by overwriting it.
    pub fn load_or_default(paths: &AccountsPaths) -> Self {
        Self::load_or_create(paths).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring settings file, using defaults");
            Settings::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AccountsPaths) -> Result<(), AccountsError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AccountsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            AccountsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Apply a command-line or environment override of the API root
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            let url = url.trim();
            if !url.is_empty() {
                self.api_url = url.to_string();
            }
        }
        self
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<(), AccountsError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AccountsError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if !renders_dates(&self.date_format) {
            return Err(AccountsError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(AccountsError::Config(
                "Request timeout must be at least one second".into(),
            ));
        }
        Ok(())
    }
}

/// Whether a strftime pattern can format a bare date
///
/// Unknown specifiers and time-of-day fields both fail when rendered.
fn renders_dates(date_format: &str) -> bool {
    let mut out = String::new();
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .is_some_and(|date| write!(out, "{}", date.format(date_format)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.currency_symbol, "₹");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AccountsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_url = "https://books.example.com/api/".into();
        settings.default_limit = 10;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_url, "https://books.example.com/api/");
        assert_eq!(loaded.default_limit, 10);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AccountsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());

        let settings = Settings::load_or_default(&paths);
        assert_eq!(settings.api_url, DEFAULT_API_URL);

        // Saving over the broken file repairs it
        settings.save(&paths).unwrap();
        assert!(Settings::load_or_create(&paths).is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.api_url, DEFAULT_API_URL);
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_api_url_override() {
        let settings = Settings::default().with_api_url(Some("http://10.0.0.2:9000/api/".into()));
        assert_eq!(settings.api_url, "http://10.0.0.2:9000/api/");

        let untouched = Settings::default().with_api_url(Some("   ".into()));
        assert_eq!(untouched.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_validate_rejects_bad_date_format() {
        let settings = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_time_fields_in_date_format() {
        for format in ["%d/%m/%Y %H:%M", "%T", "%I %p"] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(settings.validate().is_err(), "{format} should be rejected");
        }

        let settings = Settings {
            date_format: "%e %b %Y".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let settings = Settings::default().with_api_url(Some("ftp://nope".into()));
        assert!(settings.validate().is_err());
    }
}
