//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod entity;
pub mod report;
pub mod transaction;

use std::io::{BufRead, Write};

use crate::error::AccountsResult;

pub use config::{handle_config_command, ConfigCommands};
pub use entity::{handle_entity_command, EntityCommands};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// Ask a yes/no question on stdin; anything but "y" or "yes" declines
pub(crate) fn confirm(prompt: &str) -> AccountsResult<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes\n"));
        assert!(is_yes(" Y "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
