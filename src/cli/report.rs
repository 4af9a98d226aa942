//! CLI command for the transaction report
//!
//! The report runs over an already-loaded snapshot, so nothing here touches
//! the network.

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{AccountsError, AccountsResult};
use crate::export::{export_report, ExportFormat};
use crate::reports::{FilterField, FilterSelection};
use crate::services::TransactionSnapshot;

/// Report arguments; every filter is an exact, case-sensitive match
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Only transactions for this business
    #[arg(short, long)]
    pub business: Option<String>,

    /// Only transactions of this type
    #[arg(short = 't', long = "type")]
    pub txn_type: Option<String>,

    /// Only transactions in this ledger
    #[arg(short, long)]
    pub ledger: Option<String>,

    /// Only transactions under this head
    #[arg(long)]
    pub head: Option<String>,

    /// Only transactions paid by this mode
    #[arg(short, long)]
    pub mode: Option<String>,

    /// List the values each filter can take instead of the rows
    #[arg(long)]
    pub options: bool,

    /// Write the filtered report to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

impl ReportArgs {
    /// The filter selection these arguments describe
    pub fn selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::new();
        let fields = [
            (FilterField::Business, &self.business),
            (FilterField::Type, &self.txn_type),
            (FilterField::Ledger, &self.ledger),
            (FilterField::Head, &self.head),
            (FilterField::Mode, &self.mode),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                selection.set(field, value.as_str());
            }
        }
        selection
    }
}

/// Handle the report command
pub fn handle_report_command(
    snapshot: &TransactionSnapshot,
    settings: &Settings,
    args: ReportArgs,
) -> AccountsResult<()> {
    let report = snapshot.report(args.selection());

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            AccountsError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        export_report(&report, args.format, BufWriter::new(file))?;
        println!(
            "Exported {} transactions to: {}",
            report.transactions.len(),
            path.display()
        );
        return Ok(());
    }

    if args.options {
        print!("{}", report.format_options());
    } else {
        print!(
            "{}",
            report.format_terminal(&settings.currency_symbol, &settings.date_format)
        );
    }

    Ok(())
}
