//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{FinlightError, FinlightResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::LedgerService;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense history only)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    service: &LedgerService,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> FinlightResult<()> {
    let file = File::create(&output).map_err(|e| {
        FinlightError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let snapshot = service.snapshot();

    match format {
        ExportFormat::Csv => export_expenses_csv(snapshot, &mut writer)?,
        ExportFormat::Json => export_full_json(snapshot, &mut writer, pretty)?,
        ExportFormat::Yaml => export_full_yaml(snapshot, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| FinlightError::Export(e.to_string()))?;

    println!(
        "Exported {} expense(s) to {}",
        snapshot.expenses.len(),
        output.display()
    );
    Ok(())
}
