//! Reports module for Baby Accounts
//!
//! The report view model: filter option derivation, filtering, and
//! credit/debit aggregation. Everything here is a pure function of an
//! already-loaded transaction list.

pub mod filters;
pub mod totals;
pub mod transaction_report;

pub use filters::{apply_filters, derive_filter_options, FilterField, FilterOptions, FilterSelection};
pub use totals::{compute_totals, NetDirection, Totals};
pub use transaction_report::TransactionReport;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{DrOrCr, Gst, Transaction, TransactionId};

    #[allow(clippy::too_many_arguments)]
    pub fn txn(
        id: u64,
        business: &str,
        txn_type: &str,
        ledger: &str,
        head: &str,
        mode: &str,
        amount: &str,
        dr_or_cr: &str,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Days::new(id),
            business: business.into(),
            txn_type: txn_type.into(),
            ledger: ledger.into(),
            head: head.into(),
            mode: mode.into(),
            amount: amount.into(),
            dr_or_cr: DrOrCr::from(dr_or_cr.to_string()),
            discount_amount: "0.00".into(),
            gst: Gst::WithGst,
            description: None,
        }
    }

    pub fn simple(id: u64, amount: &str, dr_or_cr: &str) -> Transaction {
        txn(id, "Retail", "Expense", "Ops", "Rent", "Bank", amount, dr_or_cr)
    }
}
