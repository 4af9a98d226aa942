//! Access to the bookkeeping backend
//!
//! All persistence, validation and business rules live behind the REST API;
//! this module only moves records across the wire.

pub mod client;
pub mod page;

pub use client::ApiClient;
pub use page::{normalize_list, PageInfo};
