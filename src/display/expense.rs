//! Expense and recurring-expense display formatting
//!
//! Renders the expense history and the list of recurring costs as plain
//! column-aligned tables.

use crate::models::{Expense, Money, RecurringExpense};

use super::report::truncate;

/// Format the expense history, oldest first
///
/// `limit` keeps only the most recent entries.
pub fn format_expense_history(
    expenses: &[Expense],
    symbol: &str,
    date_format: &str,
    limit: Option<usize>,
) -> String {
    if expenses.is_empty() {
        return "No expenses added yet. Start tracking!\n".to_string();
    }

    let skip = limit.map_or(0, |n| expenses.len().saturating_sub(n));

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<12} {:<14} {:>12}  {}\n",
        "#", "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for (index, expense) in expenses.iter().enumerate().skip(skip) {
        output.push_str(&format!(
            "{:>4}  {:<12} {:<14} {:>12}  {}\n",
            index + 1,
            expense.date.format(date_format).to_string(),
            expense.category.name(),
            expense.amount.format_with_symbol(symbol),
            truncate(&expense.note, 30)
        ));
    }

    if skip > 0 {
        output.push_str(&format!("({} older expense(s) not shown)\n", skip));
    }

    output
}

/// Format the recurring expenses with their monthly total
pub fn format_recurring_list(items: &[RecurringExpense], symbol: &str) -> String {
    if items.is_empty() {
        return "No recurring expenses yet.\n".to_string();
    }

    let mut output = String::from("Your Recurring Expenses\n");
    for item in items {
        output.push_str(&format!(
            "  {} ({}): {}/month\n",
            item.name,
            item.category,
            item.amount.format_with_symbol(symbol)
        ));
    }

    let total: Money = items.iter().map(|r| r.amount).sum();
    output.push_str(&format!(
        "Total Monthly Recurring: {}\n",
        total.format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, RecurringCategory};
    use chrono::NaiveDate;

    fn expenses() -> Vec<Expense> {
        (1..=5)
            .map(|day| {
                Expense::with_note(
                    NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                    ExpenseCategory::Food,
                    Money::from_major(day as i64 * 10),
                    format!("meal {}", day),
                )
            })
            .collect()
    }

    #[test]
    fn test_history_empty() {
        assert!(format_expense_history(&[], "₹", "%Y-%m-%d", None).contains("No expenses"));
    }

    #[test]
    fn test_history_lists_all_rows() {
        let text = format_expense_history(&expenses(), "₹", "%Y-%m-%d", None);
        assert!(text.contains("2025-03-01"));
        assert!(text.contains("₹50.00"));
        assert!(text.contains("meal 5"));
        assert!(!text.contains("not shown"));
    }

    #[test]
    fn test_history_limit_keeps_newest() {
        let text = format_expense_history(&expenses(), "₹", "%d/%m/%Y", Some(2));
        assert!(!text.contains("01/03/2025"));
        assert!(text.contains("04/03/2025"));
        assert!(text.contains("05/03/2025"));
        assert!(text.contains("(3 older expense(s) not shown)"));
    }

    #[test]
    fn test_recurring_list_total() {
        let items = vec![
            RecurringExpense::new(
                "Netflix",
                Money::from_major(199),
                RecurringCategory::Subscription,
            ),
            RecurringExpense::new("Wifi", Money::from_cents(59_950), RecurringCategory::Utilities),
        ];
        let text = format_recurring_list(&items, "₹");
        assert!(text.contains("Netflix (Subscription): ₹199.00/month"));
        assert!(text.contains("Total Monthly Recurring: ₹798.50"));
    }
}
