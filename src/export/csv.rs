//! CSV Export functionality
//!
//! Exports the expense history to CSV, one row per expense in insertion order.

use std::io::Write;

use crate::error::{FinlightError, FinlightResult};
use crate::models::Snapshot;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(snapshot: &Snapshot, writer: W) -> FinlightResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Category", "Amount", "Note"])
        .map_err(|e| FinlightError::Export(e.to_string()))?;

    for expense in &snapshot.expenses {
        csv_writer
            .write_record([
                expense.date.to_string(),
                expense.category.name().to_string(),
                expense.amount.to_string(),
                expense.note.clone(),
            ])
            .map_err(|e| FinlightError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinlightError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export_quotes_notes() {
        let mut snapshot = Snapshot::default();
        snapshot.expenses.push(Expense::with_note(
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            ExpenseCategory::Food,
            Money::from_cents(12_050),
            "pizza, drinks",
        ));
        snapshot.expenses.push(Expense::new(
            NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
            ExpenseCategory::Transport,
            Money::from_major(30),
        ));

        let mut buffer = Vec::new();
        export_expenses_csv(&snapshot, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "Date,Category,Amount,Note\n\
             2025-07-01,Food,120.50,\"pizza, drinks\"\n\
             2025-07-02,Transport,30.00,\n"
        );
    }
}
