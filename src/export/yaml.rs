//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{FinlightError, FinlightResult};
use crate::export::json::FullExport;
use crate::models::Snapshot;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(snapshot: &Snapshot, writer: &mut W) -> FinlightResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    writeln!(writer, "# FinLight Ledger Export")
        .and_then(|()| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|()| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|()| writeln!(writer))
        .map_err(|e| FinlightError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinlightError::Export(e.to_string()))?;

    Ok(())
}
