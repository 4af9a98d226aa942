//! CSV Export functionality
//!
//! Writes the rows of a filtered report, followed by the three totals.

use std::io::Write;

use crate::error::{AccountsError, AccountsResult};
use crate::models::Money;
use crate::reports::TransactionReport;

const HEADER: [&str; 12] = [
    "ID",
    "Date",
    "Business",
    "Type",
    "Ledger",
    "Head",
    "Mode",
    "Amount",
    "Dr/Cr",
    "Discount",
    "GST",
    "Description",
];

fn export_err(e: impl std::fmt::Display) -> AccountsError {
    AccountsError::Export(e.to_string())
}

/// Export a report's transactions and totals to CSV
///
/// Amounts are written as plain decimals so spreadsheets can sum them;
/// values that do not parse are written as received.
pub fn export_report_csv<W: Write>(report: &TransactionReport, writer: W) -> AccountsResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_err)?;

    for txn in &report.transactions {
        csv.write_record([
            txn.id.to_string(),
            txn.transaction_date.to_string(),
            txn.business.clone(),
            txn.txn_type.clone(),
            txn.ledger.clone(),
            txn.head.clone(),
            txn.mode.clone(),
            plain_amount(&txn.amount),
            txn.dr_or_cr.to_string(),
            plain_amount(&txn.discount_amount),
            txn.gst.to_string(),
            txn.description_or_empty().to_string(),
        ])
        .map_err(export_err)?;
    }

    // Footer rows keep the column count of the table
    let totals = &report.totals;
    let footer = [
        ("Total Credit", totals.total_credit.to_string()),
        ("Total Debit", totals.total_debit.to_string()),
        (
            "Net Balance",
            format!("{} {}", totals.net_amount, totals.net_direction),
        ),
    ];
    for (label, value) in footer {
        let mut record = vec![String::new(); HEADER.len()];
        record[0] = label.to_string();
        record[7] = value;
        csv.write_record(&record).map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

fn plain_amount(raw: &str) -> String {
    Money::parse(raw)
        .map(|m| m.to_string())
        .unwrap_or_else(|_| raw.to_string())
}
