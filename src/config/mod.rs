//! Configuration module for Baby Accounts
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (backend URL, display preferences)

pub mod paths;
pub mod settings;

pub use paths::AccountsPaths;
pub use settings::Settings;
