//! Where the client keeps its config file
//!
//! The client stores nothing but `config.json`, so there is a single
//! directory to locate. `BABY_ACCOUNTS_CONFIG_DIR` wins when set; otherwise
//! it is `baby-accounts` under the platform config root (`$XDG_CONFIG_HOME`,
//! then `~/.config`, or `%APPDATA%` on Windows).

use std::path::PathBuf;

use crate::error::AccountsError;

/// The config directory and the files inside it
#[derive(Debug, Clone)]
pub struct AccountsPaths {
    base_dir: PathBuf,
}

impl AccountsPaths {
    /// Locate the config directory from the environment
    ///
    /// Fails only when no override is set and the platform config root
    /// cannot be found either.
    pub fn new() -> Result<Self, AccountsError> {
        let base_dir = if let Ok(custom) = std::env::var("BABY_ACCOUNTS_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit directory instead of looking one up
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `config.json` inside the config directory
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the config directory and any missing parents
    pub fn ensure_directories(&self) -> Result<(), AccountsError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AccountsError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Whether `config set` has ever saved a file here
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AccountsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AccountsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("baby-accounts"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AccountsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AccountsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("baby-accounts"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AccountsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("baby-accounts");
        let paths = AccountsPaths::with_base_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
