//! Report formatting for terminal output
//!
//! Renders a [`ForecastReport`] as the forecast, summary and category
//! breakdown sections, plus a few small formatting helpers.

use crate::services::{BudgetStatus, ForecastReport, RISK_THRESHOLD_DAYS};

const REPORT_WIDTH: usize = 50;
const BAR_WIDTH: usize = 20;

/// Format the forecast section
pub fn format_forecast(report: &ForecastReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Forecast: When Will You Run Out of Money?\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    if !report.has_expenses {
        output.push_str("Add some expenses to enable forecasting.\n");
        return output;
    }

    output.push_str(&format!(
        "Average Daily Spend:        {:>14}\n",
        report.average_daily_spend.as_money().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  ({} over {} day(s) this month)\n",
        report.month_to_date_spent.format_with_symbol(symbol),
        report.average_daily_spend.days()
    ));
    output.push_str(&format!(
        "Estimated Days Budget Lasts: {:>13}\n",
        report.runway.to_string()
    ));
    output.push('\n');

    match report.status {
        BudgetStatus::AtRisk => output.push_str(&format!(
            "⚠ At this rate, you may exceed your budget before the month ends (under {} days).\n",
            RISK_THRESHOLD_DAYS
        )),
        BudgetStatus::OnTrack => output.push_str("✓ You're on track with your spending!\n"),
    }

    output
}

/// Format the budget summary section
pub fn format_summary(report: &ForecastReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Spending Summary\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Monthly Allowance:          {:>14}\n",
        report.monthly_allowance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Spent So Far:         {:>14}\n",
        report.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining Budget:           {:>14}  ({})\n",
        report.remaining_budget.format_with_symbol(symbol),
        report.summary_scope
    ));
    output.push_str(&format!(
        "Total Monthly Recurring:    {:>14}\n",
        report.total_recurring.format_with_symbol(symbol)
    ));

    output
}

/// Format the category breakdown with a text bar per category
pub fn format_breakdown(report: &ForecastReport, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Category Breakdown\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    if report.categories.is_empty() {
        output.push_str("No expenses added yet. Start tracking!\n");
        return output;
    }

    let max = report
        .categories
        .iter()
        .map(|c| c.amount.as_major_f64())
        .fold(0.0, f64::max);

    for share in &report.categories {
        output.push_str(&format!(
            "{:<14} {:>12} {:>5} {}\n",
            share.category.name(),
            share.amount.format_with_symbol(symbol),
            format_percentage(share.percentage),
            format_bar(share.amount.as_major_f64(), max, BAR_WIDTH)
        ));
    }

    output
}

/// Format every section, as shown by `finlight report`
pub fn format_full_report(report: &ForecastReport, symbol: &str) -> String {
    let mut output = format!("FinLight report as of {}\n", report.as_of);
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push_str("\n\n");
    output.push_str(&format_forecast(report, symbol));
    output.push('\n');
    output.push_str(&format_summary(report, symbol));
    output.push('\n');
    output.push_str(&format_breakdown(report, symbol));
    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryScope;
    use crate::models::{Expense, ExpenseCategory, Money, Snapshot};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report_for(
        allowance: i64,
        expenses: &[(u32, ExpenseCategory, i64)],
        today: u32,
    ) -> ForecastReport {
        let mut snapshot = Snapshot::default();
        snapshot.monthly_allowance = Money::from_major(allowance);
        for &(day, category, amount) in expenses {
            snapshot
                .expenses
                .push(Expense::new(date(2025, 3, day), category, Money::from_major(amount)));
        }
        ForecastReport::generate(&snapshot, date(2025, 3, today), SummaryScope::AllTime)
    }

    #[test]
    fn test_forecast_on_track() {
        let report = report_for(
            5000,
            &[(1, ExpenseCategory::Food, 100), (3, ExpenseCategory::Food, 200)],
            5,
        );
        let text = format_forecast(&report, "₹");
        assert!(text.contains("₹60.00"));
        assert!(text.contains("83 days"));
        assert!(text.contains("You're on track with your spending!"));
    }

    #[test]
    fn test_forecast_at_risk() {
        let report = report_for(1000, &[(1, ExpenseCategory::Rent, 900)], 3);
        let text = format_forecast(&report, "₹");
        assert!(text.contains("₹300.00"));
        assert!(text.contains("3 days"));
        assert!(text.contains("you may exceed your budget"));
    }

    #[test]
    fn test_forecast_without_expenses() {
        let report = report_for(5000, &[], 9);
        assert!(format_forecast(&report, "₹")
            .contains("Add some expenses to enable forecasting."));
        assert!(format_breakdown(&report, "₹").contains("No expenses added yet"));
    }

    #[test]
    fn test_summary_labels_scope() {
        let report = report_for(5000, &[(2, ExpenseCategory::Books, 750)], 4);
        let text = format_summary(&report, "$");
        assert!(text.contains("$750.00"));
        assert!(text.contains("$4250.00"));
        assert!(text.contains("(all time)"));
    }

    #[test]
    fn test_breakdown_lists_largest_first() {
        let report = report_for(
            5000,
            &[(1, ExpenseCategory::Books, 25), (2, ExpenseCategory::Food, 75)],
            4,
        );
        let text = format_breakdown(&report, "₹");
        let food = text.find("Food").unwrap();
        let books = text.find("Books").unwrap();
        assert!(food < books);
        assert!(text.contains("75%"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }
}
