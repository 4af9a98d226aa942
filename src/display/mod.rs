//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and reports for terminal
//! display.

pub mod entity;
pub mod report;
pub mod transaction;

pub use entity::{format_entity_details, format_entity_list};
pub use transaction::{
    format_balance_line, format_transaction_details, format_transaction_table,
};
