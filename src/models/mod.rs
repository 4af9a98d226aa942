//! Core data models for Baby Accounts
//!
//! This module contains the records exchanged with the bookkeeping backend:
//! transactions, the reference entities they are tagged with, and the
//! money and id types they are built from.

pub mod entity;
pub mod ids;
pub mod money;
pub mod transaction;

pub use entity::{Entity, EntityKind, EntityPayload, EntityValidationError};
pub use ids::{EntityId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{
    DrOrCr, Gst, Transaction, TransactionPatch, TransactionPayload, TransactionValidationError,
};
