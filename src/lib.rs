//! Baby Accounts - command-line client for a small-business bookkeeping API
//!
//! This library provides the core functionality for the Baby Accounts
//! client: managing the reference entities transactions are tagged with,
//! recording transactions, and the filtered transaction report with its
//! credit/debit/net summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records exchanged with the backend
//! - `api`: HTTP client for the REST API
//! - `services`: Reference resolution, validation and snapshot loading
//! - `reports`: The transaction report view model (pure functions)
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML report export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use baby_accounts::api::ApiClient;
//! use baby_accounts::config::Settings;
//! use baby_accounts::reports::FilterSelection;
//! use baby_accounts::services::TransactionSnapshot;
//!
//! let client = ApiClient::from_settings(&Settings::default())?;
//! let snapshot = TransactionSnapshot::load(&client).await?;
//! let report = snapshot.report(FilterSelection::new());
//! println!("{}", report.format_summary("₹"));
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{AccountsError, AccountsResult};
