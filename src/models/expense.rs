//! Expense record model
//!
//! An expense is immutable once recorded; the ledger only ever appends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::money::Money;

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single ad-hoc expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    /// Calendar date of the expense (ISO-8601 on disk)
    pub date: NaiveDate,

    pub category: ExpenseCategory,

    pub amount: Money,

    /// Optional free-text note, empty when not given
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create a new expense without a note
    pub fn new(date: NaiveDate, category: ExpenseCategory, amount: Money) -> Self {
        Self {
            date,
            category,
            amount,
            note: String::new(),
        }
    }

    /// Create an expense with a note
    pub fn with_note(
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, category, amount);
        expense.note = note.into();
        expense
    }

    /// Check whether the expense falls within `[start, end]` inclusive
    pub fn is_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}
