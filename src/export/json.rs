//! JSON Export functionality
//!
//! Exports a filtered report to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{AccountsError, AccountsResult};
use crate::reports::TransactionReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export structure
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub report: &'a TransactionReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a TransactionReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Export a report to pretty-printed JSON
pub fn export_report_json<W: Write>(report: &TransactionReport, writer: W) -> AccountsResult<()> {
    let export = ReportExport::new(report);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| AccountsError::Export(e.to_string()))?;
    Ok(())
}
