//! Service layer for Baby Accounts
//!
//! The service layer sits between the command handlers and the API client,
//! handling reference resolution, validation, and snapshot loading.

pub mod entity;
pub mod snapshot;
pub mod transaction;

pub use entity::{resolve_in, EntityService};
pub use snapshot::TransactionSnapshot;
pub use transaction::{NewTransaction, ReferenceLists, TransactionEdit, TransactionService};
