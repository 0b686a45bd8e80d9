//! Ledger snapshot
//!
//! The complete in-memory state of the tracker. The snapshot is loaded once,
//! handed to whoever needs it by value or reference, and written back whole
//! after every mutation.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::ExpenseCategory;
use super::expense::Expense;
use super::money::Money;
use super::recurring::RecurringExpense;

/// Allowance used until the user sets their own
pub const DEFAULT_MONTHLY_ALLOWANCE: Money = Money::from_major(5000);

/// Complete tracker state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Declared monthly budget
    #[serde(default = "default_allowance")]
    pub monthly_allowance: Money,

    /// Expenses in insertion order
    #[serde(default, deserialize_with = "deserialize_expenses")]
    pub expenses: Vec<Expense>,

    /// Reserved; kept verbatim so a round trip never drops data
    #[serde(default)]
    pub saving_goals: Vec<serde_json::Value>,

    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,
}

fn default_allowance() -> Money {
    DEFAULT_MONTHLY_ALLOWANCE
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            monthly_allowance: DEFAULT_MONTHLY_ALLOWANCE,
            expenses: Vec::new(),
            saving_goals: Vec::new(),
            recurring_expenses: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Check whether any expense has been recorded
    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }
}

/// Expenses as found on disk: current row form, or the column-per-field form
/// written by earlier versions of the tracker
#[derive(Deserialize)]
#[serde(untagged)]
enum ExpensesOnDisk {
    Rows(Vec<Expense>),
    Columns(ColumnTable),
}

/// `{"Date": {"0": ..}, "Category": {"0": ..}, ...}` keyed by stringified row index
#[derive(Deserialize)]
struct ColumnTable {
    #[serde(rename = "Date", default)]
    date: BTreeMap<String, String>,
    #[serde(rename = "Category", default)]
    category: BTreeMap<String, ExpenseCategory>,
    #[serde(rename = "Amount", default)]
    amount: BTreeMap<String, Money>,
    #[serde(rename = "Note", default)]
    note: BTreeMap<String, Option<String>>,
}

impl ColumnTable {
    fn into_rows(mut self) -> Result<Vec<Expense>, String> {
        let mut indexed = Vec::with_capacity(self.date.len());
        for key in self.date.keys() {
            let index: usize = key
                .parse()
                .map_err(|_| format!("invalid expense row index '{}'", key))?;
            indexed.push((index, key.clone()));
        }
        indexed.sort_unstable();

        let mut rows = Vec::with_capacity(indexed.len());
        for (_, key) in indexed {
            let raw_date = self.date.remove(&key).unwrap_or_default();
            let date = parse_legacy_date(&raw_date)
                .ok_or_else(|| format!("invalid date '{}' in expense row {}", raw_date, key))?;
            let category = self
                .category
                .remove(&key)
                .ok_or_else(|| format!("missing category in expense row {}", key))?;
            let amount = self
                .amount
                .remove(&key)
                .ok_or_else(|| format!("missing amount in expense row {}", key))?;
            let note = self.note.remove(&key).flatten().unwrap_or_default();

            rows.push(Expense {
                date,
                category,
                amount,
                note,
            });
        }

        Ok(rows)
    }
}

fn parse_legacy_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.date())
    })
}

fn deserialize_expenses<'de, D>(deserializer: D) -> Result<Vec<Expense>, D::Error>
where
    D: Deserializer<'de>,
{
    match ExpensesOnDisk::deserialize(deserializer)? {
        ExpensesOnDisk::Rows(rows) => Ok(rows),
        ExpensesOnDisk::Columns(table) => table.into_rows().map_err(serde::de::Error::custom),
    }
}
