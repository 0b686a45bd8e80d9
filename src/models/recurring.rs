//! Recurring monthly expense model

use serde::{Deserialize, Serialize};

use super::category::RecurringCategory;
use super::money::Money;

/// Validation errors for recurring expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringValidationError {
    EmptyName,
    NegativeAmount,
}

impl std::fmt::Display for RecurringValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Recurring expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Recurring expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for RecurringValidationError {}

/// A subscription or other fixed monthly cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringExpense {
    pub name: String,
    /// Cost per month
    pub amount: Money,
    pub category: RecurringCategory,
}

impl RecurringExpense {
    pub fn new(name: impl Into<String>, amount: Money, category: RecurringCategory) -> Self {
        Self {
            name: name.into(),
            amount,
            category,
        }
    }

    /// Validate the recurring expense
    pub fn validate(&self) -> Result<(), RecurringValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecurringValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(RecurringValidationError::NegativeAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let ok = RecurringExpense::new(
            "Netflix",
            Money::from_major(199),
            RecurringCategory::Subscription,
        );
        assert!(ok.validate().is_ok());

        let blank = RecurringExpense::new(
            "  ",
            Money::from_major(199),
            RecurringCategory::Subscription,
        );
        assert_eq!(blank.validate(), Err(RecurringValidationError::EmptyName));

        let negative = RecurringExpense::new(
            "Gym",
            Money::from_cents(-5),
            RecurringCategory::Other,
        );
        assert_eq!(negative.validate(), Err(RecurringValidationError::NegativeAmount));
    }

    #[test]
    fn test_serialization_format() {
        let item = RecurringExpense::new(
            "Wifi",
            Money::from_major(600),
            RecurringCategory::Utilities,
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Name": "Wifi", "Amount": 600.0, "Category": "Utilities"})
        );
    }
}
