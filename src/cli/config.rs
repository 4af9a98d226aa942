//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{AccountsPaths, Settings};
use crate::error::{AccountsError, AccountsResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Change one setting and save it
    Set {
        /// api_url, request_timeout_secs, currency_symbol, date_format or default_limit
        key: String,
        value: String,
    },
}

/// Handle a config command
///
/// `settings` is what the file holds, before any command-line override.
pub fn handle_config_command(
    paths: &AccountsPaths,
    settings: Settings,
    effective_api_url: &str,
    cmd: ConfigCommands,
) -> AccountsResult<()> {
    match cmd {
        ConfigCommands::Show => print!("{}", format_config(paths, &settings, effective_api_url)),
        ConfigCommands::Set { key, value } => {
            let updated = apply_setting(settings, &key, &value)?;
            updated.validate()?;
            updated.save(paths)?;
            println!("Set {} = {}", key, value.trim());
        }
    }
    Ok(())
}

fn format_config(paths: &AccountsPaths, settings: &Settings, effective_api_url: &str) -> String {
    let mut output = String::new();
    output.push_str("Baby Accounts Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created yet)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  api_url:              {}\n", settings.api_url));
    if effective_api_url != settings.api_url {
        output.push_str(&format!("    (overridden by {})\n", effective_api_url));
    }
    output.push_str(&format!(
        "  request_timeout_secs: {}\n",
        settings.request_timeout_secs
    ));
    output.push_str(&format!("  currency_symbol:      {}\n", settings.currency_symbol));
    output.push_str(&format!("  date_format:          {}\n", settings.date_format));
    output.push_str(&format!("  default_limit:        {}\n", settings.default_limit));
    output
}

fn apply_setting(mut settings: Settings, key: &str, value: &str) -> AccountsResult<Settings> {
    let value = value.trim();
    let invalid = |what: &str| {
        AccountsError::Validation(format!("{} expects {}, got '{}'", key, what, value))
    };

    match key {
        "api_url" => settings.api_url = value.to_string(),
        "request_timeout_secs" => {
            settings.request_timeout_secs = value.parse().map_err(|_| invalid("a number"))?
        }
        "currency_symbol" => settings.currency_symbol = value.to_string(),
        "date_format" => settings.date_format = value.to_string(),
        "default_limit" => settings.default_limit = value.parse().map_err(|_| invalid("a number"))?,
        other => {
            return Err(AccountsError::Validation(format!(
                "Unknown setting '{}'",
                other
            )))
        }
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_setting() {
        let settings = apply_setting(Settings::default(), "default_limit", " 25 ").unwrap();
        assert_eq!(settings.default_limit, 25);

        let settings = apply_setting(settings, "currency_symbol", "$").unwrap();
        assert_eq!(settings.currency_symbol, "$");

        assert!(apply_setting(Settings::default(), "default_limit", "many").is_err());
        assert!(apply_setting(Settings::default(), "colour", "blue").is_err());
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AccountsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let cmd = ConfigCommands::Set {
            key: "api_url".into(),
            value: "https://books.example.com/api/".into(),
        };
        handle_config_command(&paths, Settings::default(), "", cmd).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_url, "https://books.example.com/api/");
    }

    #[test]
    fn test_set_rejects_invalid_value() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AccountsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let cmd = ConfigCommands::Set {
            key: "api_url".into(),
            value: "localhost:8000".into(),
        };
        assert!(handle_config_command(&paths, Settings::default(), "", cmd).is_err());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_format_config_shows_override() {
        let paths = AccountsPaths::with_base_dir("/tmp/baby-accounts-test".into());
        let output = format_config(&paths, &Settings::default(), "http://10.0.0.2/api/");
        assert!(output.contains("api_url:              http://127.0.0.1:8000/api/"));
        assert!(output.contains("(overridden by http://10.0.0.2/api/)"));
    }
}
