//! Expense and recurring-expense categories
//!
//! Both sets are fixed. Parsing is case-insensitive so `food`, `Food` and
//! `FOOD` all name the same category; anything else is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an ad-hoc expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Books,
    Rent,
    Transport,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Food,
        Self::Books,
        Self::Rent,
        Self::Transport,
        Self::Entertainment,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Books => "Books",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::new(s, &Self::ALL.map(|c| c.name())))
    }
}

/// Category of a recurring monthly expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecurringCategory {
    Subscription,
    Rent,
    Utilities,
    Other,
}

impl RecurringCategory {
    /// All categories in display order
    pub const ALL: [RecurringCategory; 4] =
        [Self::Subscription, Self::Rent, Self::Utilities, Self::Other];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Subscription => "Subscription",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for RecurringCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecurringCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::new(s, &Self::ALL.map(|c| c.name())))
    }
}

/// Error for an unrecognized category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    input: String,
    expected: String,
}

impl CategoryParseError {
    fn new(input: &str, expected: &[&str]) -> Self {
        Self {
            input: input.to_string(),
            expected: expected.join(", "),
        }
    }
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.input, self.expected
        )
    }
}

impl std::error::Error for CategoryParseError {}
