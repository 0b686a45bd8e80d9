//! FinLight - monthly allowance tracker with spending forecasts
//!
//! A user sets a monthly allowance, logs ad-hoc expenses and recurring
//! subscriptions, and gets a spending forecast, budget summary and category
//! breakdown. All state is one small snapshot persisted to a single JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Snapshot records (money, categories, expenses, recurring costs)
//! - `storage`: Atomic JSON file storage for the snapshot
//! - `services`: Validated mutations and forecast computations
//! - `display`: Terminal formatting of reports and lists
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers behind the `finlight` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use finlight::config::{FinlightPaths, SummaryScope};
//! use finlight::services::{ForecastReport, LedgerService};
//! use finlight::storage::LedgerStore;
//!
//! let paths = FinlightPaths::new()?;
//! let service = LedgerService::open(LedgerStore::new(paths.ledger_file()));
//! let today = chrono::Local::now().date_naive();
//! let report = ForecastReport::generate(service.snapshot(), today, SummaryScope::AllTime);
//! println!("runway: {}", report.runway);
//! # Ok::<(), finlight::FinlightError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinlightError, FinlightResult};
