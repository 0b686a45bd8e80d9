//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allowance;
pub mod expense;
pub mod export;
pub mod recurring;
pub mod report;

pub use allowance::{handle_allowance_command, AllowanceCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_report_command, ReportKind};

use chrono::NaiveDate;

use crate::error::{FinlightError, FinlightResult};
use crate::models::Money;

/// Parse a user-supplied amount such as "120", "99.50" or "₹45"
pub(crate) fn parse_amount(input: &str) -> FinlightResult<Money> {
    Money::parse(input).map_err(|e| FinlightError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub(crate) fn parse_date_or_today(input: Option<&str>) -> FinlightResult<NaiveDate> {
    match input {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            FinlightError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", raw))
        }),
        None => Ok(today()),
    }
}

/// Today's date in local time
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("99.50").unwrap(), Money::from_cents(9950));
        assert!(parse_amount("ninety").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date_or_today(Some("2025-02-28")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_date_or_today(Some("2025-02-30")).is_err());
        assert!(parse_date_or_today(Some("28/02/2025")).is_err());
        assert_eq!(parse_date_or_today(None).unwrap(), today());
    }
}
