//! Transaction snapshot loading
//!
//! Fetching and reporting are separate stages: the list is loaded once into
//! an immutable snapshot, and every report is computed from that snapshot
//! without touching the network again.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::AccountsResult;
use crate::models::Transaction;
use crate::reports::{FilterSelection, TransactionReport};

/// An immutable, cheaply clonable copy of the transaction list
#[derive(Debug, Clone)]
pub struct TransactionSnapshot {
    transactions: Arc<[Transaction]>,
}

impl TransactionSnapshot {
    /// Fetch the transaction list from the backend
    ///
    /// A failure is terminal for this attempt; there is no retry.
    pub async fn load(client: &ApiClient) -> AccountsResult<Self> {
        let transactions = client.list_transactions().await.map_err(|e| {
            tracing::debug!(error = %e, "transaction fetch failed");
            e
        })?;
        tracing::debug!(count = transactions.len(), "transactions loaded");
        Ok(Self::from_transactions(transactions))
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: transactions.into(),
        }
    }

    /// A snapshot standing in for "no list"
    pub fn empty() -> Self {
        Self::from_transactions(Vec::new())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Build a report over this snapshot
    pub fn report(&self, selection: FilterSelection) -> TransactionReport {
        TransactionReport::generate(&self.transactions, selection)
    }
}
