//! Service layer for FinLight
//!
//! The service layer provides business logic on top of the storage layer:
//! validated mutations in [`ledger`] and derived metrics in [`forecast`].

pub mod forecast;
pub mod ledger;

pub use forecast::{
    BudgetStatus, CategoryShare, DailySpend, ForecastReport, ForecastService, Runway,
    RISK_THRESHOLD_DAYS,
};
pub use ledger::LedgerService;
