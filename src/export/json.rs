//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FinlightError, FinlightResult};
use crate::models::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub ledger: &'a Snapshot,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub recurring_count: usize,
    /// Earliest expense date (ISO-8601)
    pub earliest_expense: Option<String>,
    /// Latest expense date (ISO-8601)
    pub latest_expense: Option<String>,
}

impl<'a> FullExport<'a> {
    /// Create a new full export of a snapshot
    pub fn from_snapshot(snapshot: &'a Snapshot) -> Self {
        let earliest = snapshot.expenses.iter().map(|e| e.date).min();
        let latest = snapshot.expenses.iter().map(|e| e.date).max();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            ledger: snapshot,
            metadata: ExportMetadata {
                expense_count: snapshot.expenses.len(),
                recurring_count: snapshot.recurring_expenses.len(),
                earliest_expense: earliest.map(|d| d.to_string()),
                latest_expense: latest.map(|d| d.to_string()),
            },
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    snapshot: &Snapshot,
    writer: &mut W,
    pretty: bool,
) -> FinlightResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| FinlightError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FinlightError::Export(e.to_string()))?;
    Ok(())
}
