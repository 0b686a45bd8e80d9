//! Forecast service
//!
//! Derives read-only spending metrics from a snapshot. Nothing here mutates
//! state or caches results; every figure is recomputed from the snapshot and
//! the date it is asked about.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::config::SummaryScope;
use crate::models::{ExpenseCategory, Money, Snapshot};

/// Runways shorter than this many days put the budget at risk
pub const RISK_THRESHOLD_DAYS: u64 = 30;

/// Estimated number of days the allowance lasts at the current spend rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Runway {
    Days(u64),
    /// Nothing spent this month, so there is no rate to project
    Unlimited,
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(1) => write!(f, "1 day"),
            Self::Days(days) => write!(f, "{} days", days),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Whether the runway covers a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    AtRisk,
}

impl BudgetStatus {
    pub fn is_at_risk(&self) -> bool {
        matches!(self, Self::AtRisk)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on track"),
            Self::AtRisk => write!(f, "at risk"),
        }
    }
}

/// Month-to-date spend divided by elapsed days, kept as an exact ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySpend {
    spent: Money,
    days: u32,
}

impl DailySpend {
    /// `days` is clamped to at least one
    pub fn new(spent: Money, days: u32) -> Self {
        Self {
            spent,
            days: days.max(1),
        }
    }

    pub fn spent(&self) -> Money {
        self.spent
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_zero(&self) -> bool {
        !self.spent.is_positive()
    }

    /// The average rounded half-up to the nearest minor unit
    pub fn as_money(&self) -> Money {
        let cents = self.spent.cents().max(0) as i128;
        let days = self.days as i128;
        Money::from_cents(((cents * 2 + days) / (days * 2)) as i64)
    }
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Share of all-time spending, 0-100
    pub percentage: f64,
}

/// Service computing spending metrics over one snapshot
pub struct ForecastService<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> ForecastService<'a> {
    /// Create a forecast service for a snapshot
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    /// Sum of every expense ever recorded
    pub fn total_spent(&self) -> Money {
        self.snapshot.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of expenses dated from the first of `today`'s month through `today`
    pub fn month_to_date_spent(&self, today: NaiveDate) -> Money {
        let start = first_of_month(today);
        self.snapshot
            .expenses
            .iter()
            .filter(|e| e.is_between(start, today))
            .map(|e| e.amount)
            .sum()
    }

    /// Days elapsed in `today`'s month, counting today
    pub fn days_elapsed_in_month(today: NaiveDate) -> u32 {
        today.day()
    }

    pub fn average_daily_spend(&self, today: NaiveDate) -> DailySpend {
        DailySpend::new(
            self.month_to_date_spent(today),
            Self::days_elapsed_in_month(today),
        )
    }

    /// `floor(allowance / average)`, or [`Runway::Unlimited`] when nothing is spent
    pub fn estimated_days_remaining(allowance: Money, average: DailySpend) -> Runway {
        if average.is_zero() {
            return Runway::Unlimited;
        }

        // allowance / (spent / days) == allowance * days / spent, exact in integers
        let numerator = allowance.cents().max(0) as i128 * average.days() as i128;
        let days = numerator / average.spent().cents() as i128;
        Runway::Days(u64::try_from(days).unwrap_or(u64::MAX))
    }

    /// Allowance minus spending; negative once the budget is overspent
    pub fn remaining_budget(allowance: Money, spent: Money) -> Money {
        allowance - spent
    }

    /// All-time spending grouped by category
    pub fn category_breakdown(&self) -> BTreeMap<ExpenseCategory, Money> {
        let mut breakdown = BTreeMap::new();
        for expense in &self.snapshot.expenses {
            *breakdown.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
        }
        breakdown
    }

    /// Sum of all recurring monthly costs
    pub fn total_recurring_monthly(&self) -> Money {
        self.snapshot.recurring_expenses.iter().map(|r| r.amount).sum()
    }

    pub fn budget_status(runway: Runway) -> BudgetStatus {
        match runway {
            Runway::Days(days) if days < RISK_THRESHOLD_DAYS => BudgetStatus::AtRisk,
            _ => BudgetStatus::OnTrack,
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Every derived figure the presentation layer shows, computed in one pass
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub as_of: NaiveDate,
    pub monthly_allowance: Money,
    pub has_expenses: bool,
    pub total_spent: Money,
    pub month_to_date_spent: Money,
    pub average_daily_spend: DailySpend,
    pub runway: Runway,
    pub status: BudgetStatus,
    /// Scope of `scoped_spent` and `remaining_budget`
    pub summary_scope: SummaryScope,
    pub scoped_spent: Money,
    pub remaining_budget: Money,
    /// Largest category first
    pub categories: Vec<CategoryShare>,
    pub total_recurring: Money,
}

impl ForecastReport {
    /// Generate the report for `snapshot` as seen on `today`
    pub fn generate(snapshot: &Snapshot, today: NaiveDate, scope: SummaryScope) -> Self {
        let service = ForecastService::new(snapshot);
        let allowance = snapshot.monthly_allowance;

        let total_spent = service.total_spent();
        let month_to_date_spent = service.month_to_date_spent(today);
        let average_daily_spend = service.average_daily_spend(today);
        let runway = ForecastService::estimated_days_remaining(allowance, average_daily_spend);

        let scoped_spent = match scope {
            SummaryScope::AllTime => total_spent,
            SummaryScope::Month => month_to_date_spent,
        };

        let mut categories: Vec<CategoryShare> = service
            .category_breakdown()
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: percentage_of(amount, total_spent),
            })
            .collect();
        categories.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));

        Self {
            as_of: today,
            monthly_allowance: allowance,
            has_expenses: snapshot.has_expenses(),
            total_spent,
            month_to_date_spent,
            average_daily_spend,
            runway,
            status: ForecastService::budget_status(runway),
            summary_scope: scope,
            scoped_spent,
            remaining_budget: ForecastService::remaining_budget(allowance, scoped_spent),
            categories,
            total_recurring: service.total_recurring_monthly(),
        }
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}
