//! Transaction Report
//!
//! Combines a loaded transaction list with a filter selection into
//! everything the report screen shows: the filter option sets, the matching
//! rows, and the credit/debit/net summary.

use serde::Serialize;

use super::filters::{apply_filters, derive_filter_options, FilterField, FilterOptions, FilterSelection};
use super::totals::{compute_totals, Totals};
use crate::display::report::{format_header, separator};
use crate::display::transaction::format_transaction_table;
use crate::models::Transaction;

const REPORT_WIDTH: usize = 80;

/// Filtered transaction report
#[derive(Debug, Clone, Serialize)]
pub struct TransactionReport {
    /// Filters that produced this report
    pub selection: FilterSelection,
    /// Option sets, derived from the full list rather than the filtered one
    pub options: FilterOptions,
    /// Matching transactions in their original order
    pub transactions: Vec<Transaction>,
    /// Totals over the matching transactions only
    pub totals: Totals,
    /// Size of the list before filtering
    pub total_count: usize,
}

impl TransactionReport {
    /// Generate a report over an already-loaded list
    pub fn generate(transactions: &[Transaction], selection: FilterSelection) -> Self {
        let options = derive_filter_options(transactions);
        let matching: Vec<Transaction> = apply_filters(transactions, &selection)
            .into_iter()
            .cloned()
            .collect();
        let totals = compute_totals(&matching);

        Self {
            selection,
            options,
            transactions: matching,
            totals,
            total_count: transactions.len(),
        }
    }

    /// Whether the report covers the whole list
    pub fn is_unfiltered(&self) -> bool {
        self.selection.is_empty()
    }

    /// Format the three summary figures
    pub fn format_summary(&self, currency_symbol: &str) -> String {
        let totals = &self.totals;
        let mut output = String::new();
        output.push_str(&format!(
            "{:<14} {:>20}\n",
            "Total Credit:",
            totals.total_credit.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<14} {:>20}\n",
            "Total Debit:",
            totals.total_debit.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<14} {:>20} ({})\n",
            "Net Balance:",
            totals.net_amount.format_with_symbol(currency_symbol),
            totals.net_direction
        ));
        output
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format_header("Transaction Report", REPORT_WIDTH));
        output.push('\n');
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        if self.selection.is_empty() {
            output.push_str("Filters: none\n");
        } else {
            let active: Vec<String> = self
                .selection
                .active()
                .map(|(field, value)| format!("{}={}", field, value))
                .collect();
            output.push_str(&format!("Filters: {}\n", active.join(", ")));
        }
        output.push_str(&format!(
            "Showing {} of {} transactions\n\n",
            self.transactions.len(),
            self.total_count
        ));

        output.push_str(&self.format_summary(currency_symbol));
        output.push('\n');
        output.push_str(&format_transaction_table(
            &self.transactions,
            currency_symbol,
            date_format,
        ));

        output
    }

    /// Format the filter option sets, one field per block
    pub fn format_options(&self) -> String {
        let mut output = String::new();
        for field in FilterField::ALL {
            let values = self.options.get(field);
            let selected = self.selection.get(field);
            output.push_str(&format!("{} ({}):\n", field.label(), values.len()));
            output.push_str(&format!(
                "  {} All\n",
                if selected.is_none() { "*" } else { " " }
            ));
            for value in values {
                let marker = if selected == Some(value.as_str()) { "*" } else { " " };
                output.push_str(&format!("  {} {}\n", marker, value));
            }
        }
        output
    }
}
