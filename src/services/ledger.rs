//! Ledger service
//!
//! The mutation boundary for the tracker. Requests are validated before they
//! touch the snapshot, and every accepted mutation is saved immediately. If
//! the save fails the mutation is undone, so the in-memory snapshot never
//! runs ahead of what is on disk.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinlightError, FinlightResult};
use crate::models::{
    Expense, ExpenseCategory, Money, RecurringCategory, RecurringExpense, Snapshot,
};
use crate::storage::LedgerStore;

/// Service owning the snapshot and the store it is persisted to
pub struct LedgerService {
    store: LedgerStore,
    snapshot: Snapshot,
}

impl LedgerService {
    /// Load the snapshot from `store`, falling back to defaults if unreadable
    pub fn open(store: LedgerStore) -> Self {
        let snapshot = store.load();
        Self { store, snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn allowance(&self) -> Money {
        self.snapshot.monthly_allowance
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.snapshot.expenses
    }

    pub fn recurring(&self) -> &[RecurringExpense] {
        &self.snapshot.recurring_expenses
    }

    /// Write the current snapshot without changing it
    pub fn save(&self) -> FinlightResult<()> {
        self.store.save(&self.snapshot)
    }

    /// Set the monthly allowance, returning the previous value
    pub fn set_allowance(&mut self, amount: Money) -> FinlightResult<Money> {
        if amount.is_negative() {
            return Err(FinlightError::negative_amount("Monthly allowance"));
        }

        let previous = std::mem::replace(&mut self.snapshot.monthly_allowance, amount);
        if let Err(err) = self.save() {
            self.snapshot.monthly_allowance = previous;
            return Err(err);
        }

        info!(from = %previous, to = %amount, "monthly allowance updated");
        Ok(previous)
    }

    /// Record an expense
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        note: Option<String>,
    ) -> FinlightResult<Expense> {
        let expense = Expense::with_note(date, category, amount, note.unwrap_or_default());
        expense
            .validate()
            .map_err(|e| FinlightError::Validation(e.to_string()))?;

        self.snapshot.expenses.push(expense.clone());
        if let Err(err) = self.save() {
            self.snapshot.expenses.pop();
            return Err(err);
        }

        info!(%date, %category, %amount, "expense added");
        Ok(expense)
    }

    /// Record a recurring monthly expense
    pub fn add_recurring(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        category: RecurringCategory,
    ) -> FinlightResult<RecurringExpense> {
        let name = name.into().trim().to_string();
        let item = RecurringExpense::new(name, amount, category);
        item.validate()
            .map_err(|e| FinlightError::Validation(e.to_string()))?;

        self.snapshot.recurring_expenses.push(item.clone());
        if let Err(err) = self.save() {
            self.snapshot.recurring_expenses.pop();
            return Err(err);
        }

        info!(name = %item.name, %amount, %category, "recurring expense added");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ForecastService;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_service() -> (TempDir, LedgerService) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("finlight_data.json"));
        (temp_dir, LedgerService::open(store))
    }

    #[test]
    fn test_open_fresh_uses_defaults() {
        let (_temp_dir, service) = create_test_service();
        assert_eq!(service.allowance(), Money::from_major(5000));
        assert!(service.expenses().is_empty());
        assert!(service.recurring().is_empty());
    }

    #[test]
    fn test_set_allowance_persists() {
        let (_temp_dir, mut service) = create_test_service();

        let previous = service.set_allowance(Money::from_major(7500)).unwrap();
        assert_eq!(previous, Money::from_major(5000));

        let reloaded = service.store().try_load().unwrap();
        assert_eq!(reloaded.monthly_allowance, Money::from_major(7500));
    }

    #[test]
    fn test_negative_allowance_rejected_before_mutation() {
        let (_temp_dir, mut service) = create_test_service();

        let err = service.set_allowance(Money::from_cents(-1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.allowance(), Money::from_major(5000));
        assert!(!service.store().path().exists());
    }

    #[test]
    fn test_add_expense_appends_in_order_and_persists() {
        let (_temp_dir, mut service) = create_test_service();

        service
            .add_expense(date(2025, 3, 2), ExpenseCategory::Food, Money::from_major(40), None)
            .unwrap();
        let second = service
            .add_expense(
                date(2025, 3, 1),
                ExpenseCategory::Books,
                Money::from_cents(25_050),
                Some("textbook".into()),
            )
            .unwrap();
        assert_eq!(second.note, "textbook");

        let reloaded = service.store().try_load().unwrap();
        assert_eq!(reloaded.expenses, service.expenses());
        assert_eq!(reloaded.expenses[0].category, ExpenseCategory::Food);
        assert_eq!(reloaded.expenses[1].category, ExpenseCategory::Books);
    }

    #[test]
    fn test_negative_expense_rejected() {
        let (_temp_dir, mut service) = create_test_service();

        let err = service
            .add_expense(date(2025, 3, 2), ExpenseCategory::Food, Money::from_cents(-500), None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.expenses().is_empty());
    }

    #[test]
    fn test_total_spent_matches_sum_of_additions() {
        let (_temp_dir, mut service) = create_test_service();
        let amounts = [0, 1, 99, 12_345, 500_000];

        for cents in amounts {
            service
                .add_expense(
                    date(2025, 4, 1),
                    ExpenseCategory::Other,
                    Money::from_cents(cents),
                    None,
                )
                .unwrap();
        }

        let total = ForecastService::new(service.snapshot()).total_spent();
        assert_eq!(total.cents(), amounts.iter().sum::<i64>());
    }

    #[test]
    fn test_add_recurring_trims_and_validates() {
        let (_temp_dir, mut service) = create_test_service();

        let item = service
            .add_recurring("  Netflix ", Money::from_major(199), RecurringCategory::Subscription)
            .unwrap();
        assert_eq!(item.name, "Netflix");

        let err = service
            .add_recurring("   ", Money::from_major(10), RecurringCategory::Other)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.recurring().len(), 1);
    }

    #[test]
    fn test_failed_save_rolls_back_mutation() {
        let (temp_dir, mut service) = create_test_service();
        service.set_allowance(Money::from_major(6000)).unwrap();

        // Block the temp file so the next save fails
        fs::create_dir(temp_dir.path().join("finlight_data.json.tmp")).unwrap();

        let err = service
            .add_expense(date(2025, 3, 2), ExpenseCategory::Food, Money::from_major(5), None)
            .unwrap_err();
        assert!(err.is_storage());
        assert!(service.expenses().is_empty());

        assert!(service.set_allowance(Money::from_major(1)).is_err());
        assert_eq!(service.allowance(), Money::from_major(6000));

        assert!(service
            .add_recurring("Gym", Money::from_major(900), RecurringCategory::Other)
            .is_err());
        assert!(service.recurring().is_empty());
    }

    #[test]
    fn test_reopen_sees_previous_session() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finlight_data.json");

        {
            let mut service = LedgerService::open(LedgerStore::new(path.clone()));
            service.set_allowance(Money::from_major(3000)).unwrap();
            service
                .add_expense(
                    date(2025, 5, 9),
                    ExpenseCategory::Transport,
                    Money::from_major(60),
                    None,
                )
                .unwrap();
        }

        let service = LedgerService::open(LedgerStore::new(path));
        assert_eq!(service.allowance(), Money::from_major(3000));
        assert_eq!(service.expenses().len(), 1);
    }
}
