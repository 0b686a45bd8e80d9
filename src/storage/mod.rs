//! Storage layer for FinLight
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in a single file.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_optional, write_json_atomic};
pub use ledger::LedgerStore;
