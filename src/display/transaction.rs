//! Transaction display formatting
//!
//! Renders transaction lists as tables and single transactions as detail
//! blocks.

use chrono::NaiveDate;
use std::fmt::Write;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Money, Transaction};
use crate::reports::Totals;

const DESCRIPTION_WIDTH: usize = 90;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Business")]
    business: String,
    #[tabled(rename = "Type")]
    txn_type: String,
    #[tabled(rename = "Ledger")]
    ledger: String,
    #[tabled(rename = "Head")]
    head: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Dr/Cr")]
    dr_or_cr: String,
    #[tabled(rename = "GST")]
    gst: String,
}

/// Show an amount with the currency symbol, or as received if it does not parse
pub fn format_amount(raw: &str, currency_symbol: &str) -> String {
    Money::parse(raw)
        .map(|m| m.format_with_symbol(currency_symbol))
        .unwrap_or_else(|_| raw.to_string())
}

/// Format a date with the user's pattern, falling back to ISO 8601
///
/// Patterns that ask for time-of-day fields cannot render a bare date.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        tracing::debug!(date_format, "date format not renderable for a date");
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn to_row(txn: &Transaction, currency_symbol: &str, date_format: &str) -> TransactionRow {
    TransactionRow {
        id: txn.id.to_string(),
        date: format_date(txn.transaction_date, date_format),
        business: txn.business.clone(),
        txn_type: txn.txn_type.clone(),
        ledger: txn.ledger.clone(),
        head: txn.head.clone(),
        mode: txn.mode.clone(),
        amount: format_amount(&txn.amount, currency_symbol),
        dr_or_cr: txn.dr_or_cr.to_string(),
        gst: txn.gst.to_string(),
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| to_row(txn, currency_symbol, date_format));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(7), Alignment::right());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format the one-line balance shown under the transaction list
pub fn format_balance_line(totals: &Totals, currency_symbol: &str) -> String {
    format!(
        "Total Balance: {} ({})  [credit {}, debit {}]\n",
        totals.net_amount.format_with_symbol(currency_symbol),
        totals.net_direction,
        totals.total_credit.format_with_symbol(currency_symbol),
        totals.total_debit.format_with_symbol(currency_symbol),
    )
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: #{}\n", txn.id));
    output.push_str(&format!(
        "  Date:        {}\n",
        format_date(txn.transaction_date, date_format)
    ));
    output.push_str(&format!("  Business:    {}\n", txn.business));
    output.push_str(&format!("  Type:        {}\n", txn.txn_type));
    output.push_str(&format!("  Ledger:      {}\n", txn.ledger));
    output.push_str(&format!("  Head:        {}\n", txn.head));
    output.push_str(&format!("  Mode:        {}\n", txn.mode));
    output.push_str(&format!(
        "  Amount:      {} ({})\n",
        format_amount(&txn.amount, currency_symbol),
        txn.dr_or_cr
    ));
    output.push_str(&format!(
        "  Discount:    {}\n",
        format_amount(&txn.discount_amount, currency_symbol)
    ));
    output.push_str(&format!("  GST:         {}\n", txn.gst));

    let description = txn.description_or_empty();
    if !description.is_empty() {
        output.push_str(&format!(
            "  Description: {}\n",
            truncate(description, DESCRIPTION_WIDTH)
        ));
    }

    output
}
