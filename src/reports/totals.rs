//! Credit/debit totals
//!
//! Every transaction tagged exactly `Dr` is a debit. Anything else, including
//! tags the backend should never send, lands on the credit side. Amounts that
//! do not parse count as zero.

use serde::Serialize;
use std::fmt;

use crate::models::{Money, Transaction};

/// Which side the net balance falls on; a tie is a credit balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetDirection {
    Credit,
    Debit,
}

impl fmt::Display for NetDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit"),
            Self::Debit => write!(f, "Debit"),
        }
    }
}

/// Aggregates over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_credit: Money,
    pub total_debit: Money,
    /// Absolute difference between the two sides
    pub net_amount: Money,
    pub net_direction: NetDirection,
}

impl Default for Totals {
    fn default() -> Self {
        Self::from_sides(Money::zero(), Money::zero())
    }
}

impl Totals {
    pub fn from_sides(total_credit: Money, total_debit: Money) -> Self {
        let net_direction = if total_credit >= total_debit {
            NetDirection::Credit
        } else {
            NetDirection::Debit
        };
        Self {
            total_credit,
            total_debit,
            net_amount: (total_credit - total_debit).abs(),
            net_direction,
        }
    }
}

/// Sum credits and debits over the given transactions
pub fn compute_totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_credit = Money::zero();
    let mut total_debit = Money::zero();

    for txn in transactions {
        let amount = txn.amount_value();
        if txn.is_debit() {
            total_debit += amount;
        } else {
            total_credit += amount;
        }
    }

    Totals::from_sides(total_credit, total_debit)
}
