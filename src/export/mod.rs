//! Export module for FinLight
//!
//! Provides data export in multiple formats:
//! - CSV: the expense history (spreadsheet-compatible)
//! - JSON: the full ledger with export metadata
//! - YAML: the full ledger, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
