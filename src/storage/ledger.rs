//! Ledger store
//!
//! Loads and saves the whole snapshot as one JSON file. There is no locking:
//! two processes sharing the same file can lose each other's writes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FinlightError, FinlightResult};
use crate::models::Snapshot;

use super::file_io::{read_json_optional, write_json_atomic};

/// Durable home of the ledger snapshot
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable ledger file is copied before defaults take over
    pub fn quarantine_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Load the snapshot, surfacing malformed content as an error
    ///
    /// A missing file is not an error and yields the default snapshot.
    pub fn try_load(&self) -> FinlightResult<Snapshot> {
        let Some(snapshot) = read_json_optional::<Snapshot, _>(&self.path)? else {
            debug!(path = %self.path.display(), "no ledger file, using defaults");
            return Ok(Snapshot::default());
        };

        check_invariants(&snapshot)?;

        debug!(
            path = %self.path.display(),
            expenses = snapshot.expenses.len(),
            recurring = snapshot.recurring_expenses.len(),
            "ledger loaded"
        );
        Ok(snapshot)
    }

    /// Load the snapshot, falling back to defaults when the file is unusable
    ///
    /// The unusable file is copied to [`quarantine_path`](Self::quarantine_path)
    /// first so the next save does not destroy it.
    pub fn load(&self) -> Snapshot {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ledger file unreadable, starting from defaults"
                );
                self.quarantine();
                Snapshot::default()
            }
        }
    }

    /// Overwrite the ledger file with `snapshot`
    pub fn save(&self, snapshot: &Snapshot) -> FinlightResult<()> {
        write_json_atomic(&self.path, snapshot)?;
        debug!(
            path = %self.path.display(),
            expenses = snapshot.expenses.len(),
            "ledger saved"
        );
        Ok(())
    }

    fn quarantine(&self) {
        let target = self.quarantine_path();
        match fs::copy(&self.path, &target) {
            Ok(_) => warn!(copy = %target.display(), "kept a copy of the unreadable ledger"),
            Err(e) => warn!(error = %e, "could not copy unreadable ledger aside"),
        }
    }
}

fn check_invariants(snapshot: &Snapshot) -> FinlightResult<()> {
    if snapshot.monthly_allowance.is_negative() {
        return Err(FinlightError::negative_amount("Monthly allowance"));
    }
    for expense in &snapshot.expenses {
        expense
            .validate()
            .map_err(|e| FinlightError::Validation(e.to_string()))?;
    }
    for item in &snapshot.recurring_expenses {
        item.validate()
            .map_err(|e| FinlightError::Validation(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Money, RecurringCategory, RecurringExpense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::new(temp_dir.path().join("finlight_data.json"))
    }

    fn sample_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.monthly_allowance = Money::from_major(8000);
        snapshot.expenses.push(Expense::with_note(
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            ExpenseCategory::Entertainment,
            Money::from_cents(45_099),
            "concert",
        ));
        snapshot.expenses.push(Expense::new(
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
            ExpenseCategory::Food,
            Money::from_major(80),
        ));
        snapshot.recurring_expenses.push(RecurringExpense::new(
            "Netflix",
            Money::from_major(199),
            RecurringCategory::Subscription,
        ));
        snapshot
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let snapshot = store.load();
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(snapshot.monthly_allowance, Money::from_major(5000));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let snapshot = sample_snapshot();

        store.save(&snapshot).unwrap();
        assert_eq!(store.try_load().unwrap(), snapshot);
    }

    #[test]
    fn test_dates_written_as_iso_strings() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.save(&sample_snapshot()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["expenses"][0]["Date"], "2025-02-14");
        assert_eq!(raw["saving_goals"], serde_json::json!([]));
    }

    #[test]
    fn test_corrupt_file_falls_back_and_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "{ \"monthly_allowance\": ").unwrap();

        assert!(store.try_load().is_err());

        let snapshot = store.load();
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(
            fs::read_to_string(store.quarantine_path()).unwrap(),
            "{ \"monthly_allowance\": "
        );
    }

    #[test]
    fn test_negative_amount_on_disk_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(
            store.path(),
            r#"{"expenses": [{"Date": "2025-01-01", "Category": "Food", "Amount": -3}]}"#,
        )
        .unwrap();

        let err = store.try_load().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn test_out_of_range_amount_on_disk_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(
            store.path(),
            r#"{"expenses": [
                {"Date": "2025-03-01", "Category": "Food", "Amount": 1e20},
                {"Date": "2025-03-02", "Category": "Food", "Amount": 1e20}
            ]}"#,
        )
        .unwrap();

        assert!(store.try_load().is_err());
        assert_eq!(store.load(), Snapshot::default());
        assert!(store.quarantine_path().exists());
    }

    #[test]
    fn test_unwritable_location_surfaces_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let store = LedgerStore::new(blocker.join("finlight_data.json"));

        let err = store.save(&Snapshot::default()).unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_quarantine_path() {
        let store = LedgerStore::new(PathBuf::from("/tmp/x/finlight_data.json"));
        assert_eq!(
            store.quarantine_path(),
            PathBuf::from("/tmp/x/finlight_data.json.corrupt")
        );
    }
}
