//! Core data models for FinLight
//!
//! This module contains the records that make up a ledger snapshot: money
//! amounts, categories, expenses and recurring expenses.

pub mod category;
pub mod expense;
pub mod money;
pub mod recurring;
pub mod snapshot;

pub use category::{CategoryParseError, ExpenseCategory, RecurringCategory};
pub use expense::{Expense, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
pub use recurring::{RecurringExpense, RecurringValidationError};
pub use snapshot::{Snapshot, DEFAULT_MONTHLY_ALLOWANCE};
