//! YAML Export functionality
//!
//! Exports a filtered report to YAML for human reading.

use std::io::Write;

use crate::error::{AccountsError, AccountsResult};
use crate::export::json::ReportExport;
use crate::reports::TransactionReport;

/// Export a report to YAML, preceded by a comment header
pub fn export_report_yaml<W: Write>(
    report: &TransactionReport,
    mut writer: W,
) -> AccountsResult<()> {
    let export = ReportExport::new(report);
    let io_err = |e: std::io::Error| AccountsError::Export(e.to_string());

    writeln!(writer, "# Baby Accounts Transaction Report").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    if report.is_unfiltered() {
        writeln!(writer, "# Filters: none").map_err(io_err)?;
    } else {
        let active: Vec<String> = report
            .selection
            .active()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        writeln!(writer, "# Filters: {}", active.join(", ")).map_err(io_err)?;
    }
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AccountsError::Export(e.to_string()))?;

    Ok(())
}
