//! User settings for FinLight
//!
//! Manages display preferences and the spending scope used by the budget
//! summary.

use std::fmt::Write;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::FinlightPaths;
use crate::error::FinlightError;
use crate::storage::write_json_atomic;

/// Which expenses count against the allowance in the budget summary
///
/// The forecast is always month-to-date. The summary defaults to all-time
/// spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SummaryScope {
    /// Every expense ever recorded
    #[default]
    AllTime,
    /// Only expenses dated in the current month up to today
    Month,
}

impl std::fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllTime => write!(f, "all time"),
            Self::Month => write!(f, "this month"),
        }
    }
}

/// User settings for FinLight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Spending scope for the remaining-budget figure
    #[serde(default)]
    pub summary_scope: SummaryScope,
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            summary_scope: SummaryScope::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinlightPaths) -> Result<Self, FinlightError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinlightError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinlightError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail at display time
    ///
    /// A format is only usable if it can render a plain date, so specifiers
    /// that need a time or zone are rejected along with malformed ones.
    pub fn validate(&self) -> Result<(), FinlightError> {
        let mut rendered = String::new();
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(FinlightError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinlightPaths) -> Result<(), FinlightError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
