//! Forecast and report CLI commands
//!
//! Every report is regenerated from the current snapshot on each call.

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_forecast, format_full_report, format_summary};
use crate::error::FinlightResult;
use crate::services::{ForecastReport, LedgerService};

use super::parse_date_or_today;

/// Which section of the report to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Average daily spend, runway and budget status
    Forecast,
    /// Total spent, remaining budget and recurring total
    Summary,
    /// Spending per category
    Breakdown,
    /// All sections
    Full,
}

/// Handle a report command
///
/// `as_of` overrides today's date (YYYY-MM-DD).
pub fn handle_report_command(
    service: &LedgerService,
    settings: &Settings,
    kind: ReportKind,
    as_of: Option<&str>,
) -> FinlightResult<()> {
    let today = parse_date_or_today(as_of)?;
    let report = ForecastReport::generate(service.snapshot(), today, settings.summary_scope);
    let symbol = settings.currency_symbol.as_str();

    let text = match kind {
        ReportKind::Forecast => format_forecast(&report, symbol),
        ReportKind::Summary => format_summary(&report, symbol),
        ReportKind::Breakdown => format_breakdown(&report, symbol),
        ReportKind::Full => format_full_report(&report, symbol),
    };
    print!("{}", text);

    Ok(())
}
