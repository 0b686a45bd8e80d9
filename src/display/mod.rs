//! Display formatting for terminal output
//!
//! Turns snapshots and forecast reports into the text the CLI prints.

pub mod expense;
pub mod report;

pub use expense::{format_expense_history, format_recurring_list};
pub use report::{format_breakdown, format_forecast, format_full_report, format_summary};
