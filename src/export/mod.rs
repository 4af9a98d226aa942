//! Export module for Baby Accounts
//!
//! Writes a filtered transaction report in one of three formats:
//! - CSV: rows plus a totals footer (spreadsheet-compatible)
//! - JSON: the full report with schema metadata
//! - YAML: the same structure, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::error::AccountsResult;
use crate::reports::TransactionReport;

pub use self::csv::export_report_csv;
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

/// Write a report in the chosen format
pub fn export_report<W: Write>(
    report: &TransactionReport,
    format: ExportFormat,
    writer: W,
) -> AccountsResult<()> {
    match format {
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer),
        ExportFormat::Yaml => export_report_yaml(report, writer),
    }
}
