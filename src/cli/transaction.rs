//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::NaiveDate;
use clap::Subcommand;

use super::confirm;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::display::{format_balance_line, format_transaction_details, format_transaction_table};
use crate::error::{AccountsError, AccountsResult};
use crate::models::{DrOrCr, Gst, Money, TransactionId};
use crate::reports::compute_totals;
use crate::services::{NewTransaction, TransactionEdit, TransactionService};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions with their balance
    #[command(alias = "ls")]
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Add a new transaction
    Add {
        /// Business name or ID
        #[arg(short, long)]
        business: String,
        /// Type name or ID
        #[arg(short = 't', long = "type")]
        txn_type: String,
        /// Ledger name or ID
        #[arg(short, long)]
        ledger: String,
        /// Head name or ID
        #[arg(long)]
        head: String,
        /// Mode name or ID
        #[arg(short, long)]
        mode: String,
        /// Amount (e.g., "1250.00" or "1,250")
        #[arg(short, long)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Dr or Cr
        #[arg(long, default_value = "Dr")]
        dr_or_cr: String,
        /// Discount amount
        #[arg(long, default_value = "0")]
        discount: String,
        /// "With GST" or "Without GST"
        #[arg(long, default_value = "With GST")]
        gst: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit a transaction; only the given fields change
    Edit {
        /// Transaction ID
        id: TransactionId,
        #[arg(short, long)]
        business: Option<String>,
        #[arg(short = 't', long = "type")]
        txn_type: Option<String>,
        #[arg(short, long)]
        ledger: Option<String>,
        #[arg(long)]
        head: Option<String>,
        #[arg(short, long)]
        mode: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        /// Transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        dr_or_cr: Option<String>,
        #[arg(long)]
        discount: Option<String>,
        #[arg(long)]
        gst: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: TransactionId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub async fn handle_transaction_command(
    client: &ApiClient,
    settings: &Settings,
    cmd: TransactionCommands,
) -> AccountsResult<()> {
    let service = TransactionService::new(client);
    let symbol = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        TransactionCommands::List { limit } => {
            let transactions = service.list().await?;
            let limit = limit.unwrap_or(settings.default_limit);
            let shown = &transactions[..transactions.len().min(limit)];

            print!("{}", format_transaction_table(shown, symbol, date_format));
            if shown.len() < transactions.len() {
                println!("Showing {} of {} transactions", shown.len(), transactions.len());
            }
            print!("{}", format_balance_line(&compute_totals(shown), symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(id).await?;
            print!("{}", format_transaction_details(&txn, symbol, date_format));
        }

        TransactionCommands::Add {
            business,
            txn_type,
            ledger,
            head,
            mode,
            amount,
            date,
            dr_or_cr,
            discount,
            gst,
            description,
        } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let input = NewTransaction {
                date,
                business,
                txn_type,
                ledger,
                head,
                mode,
                amount: parse_money("amount", &amount)?,
                dr_or_cr: parse_dr_or_cr(&dr_or_cr)?,
                discount_amount: parse_money("discount", &discount)?,
                gst: parse_gst(&gst)?,
                description,
            };

            let id = service.add(input).await?;
            println!("Created transaction #{}", id);
        }

        TransactionCommands::Edit {
            id,
            business,
            txn_type,
            ledger,
            head,
            mode,
            amount,
            date,
            dr_or_cr,
            discount,
            gst,
            description,
        } => {
            let edit = TransactionEdit {
                date: date.as_deref().map(parse_date).transpose()?,
                business,
                txn_type,
                ledger,
                head,
                mode,
                amount: amount.as_deref().map(|a| parse_money("amount", a)).transpose()?,
                dr_or_cr: dr_or_cr.as_deref().map(parse_dr_or_cr).transpose()?,
                discount_amount: discount
                    .as_deref()
                    .map(|d| parse_money("discount", d))
                    .transpose()?,
                gst: gst.as_deref().map(parse_gst).transpose()?,
                description,
            };

            service.edit(id, edit).await?;
            println!("Updated transaction #{}", id);
        }

        TransactionCommands::Delete { id, yes } => {
            let txn = service.get(id).await?;

            if !yes {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, symbol, date_format));
                println!();
                if !confirm("Delete this transaction? (yes/no): ")? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.delete(id).await?;
            println!("Deleted transaction #{}", id);
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> AccountsResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        AccountsError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

fn parse_money(field: &str, s: &str) -> AccountsResult<Money> {
    Money::parse(s).map_err(|e| AccountsError::Validation(format!("{}: {}", field, e)))
}

fn parse_dr_or_cr(s: &str) -> AccountsResult<DrOrCr> {
    s.parse().map_err(AccountsError::Validation)
}

fn parse_gst(s: &str) -> AccountsResult<Gst> {
    s.parse().map_err(AccountsError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(
            parse_date("2024-03-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert!(parse_date("31/03/2024").unwrap_err().is_validation());

        assert_eq!(parse_money("amount", "₹1,250.5").unwrap(), Money::from_cents(125_050));
        assert!(parse_money("amount", "twelve").unwrap_err().is_validation());

        assert_eq!(parse_dr_or_cr("credit").unwrap(), DrOrCr::Cr);
        assert!(parse_dr_or_cr("maybe").is_err());
        assert_eq!(parse_gst("Without GST").unwrap(), Gst::WithoutGst);
    }
}
