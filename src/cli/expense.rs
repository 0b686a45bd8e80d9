//! Expense CLI commands
//!
//! Adding an expense and browsing the expense history.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_history;
use crate::error::FinlightResult;
use crate::models::ExpenseCategory;
use crate::services::LedgerService;

use super::{parse_amount, parse_date_or_today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "120" or "99.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Books, Rent, Transport, Entertainment, Other)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the expense history
    List {
        /// Only show the most recent N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the available expense categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinlightResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let category: ExpenseCategory = category.parse()?;
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;

            let expense = service.add_expense(date, category, amount, note)?;
            println!(
                "Expense added: {} on {} ({})",
                expense.amount.format_with_symbol(symbol),
                expense.date.format(&settings.date_format),
                expense.category
            );
        }

        ExpenseCommands::List { limit } => {
            print!(
                "{}",
                format_expense_history(service.expenses(), symbol, &settings.date_format, limit)
            );
        }

        ExpenseCommands::Categories => {
            for category in ExpenseCategory::ALL {
                println!("{}", category);
            }
        }
    }

    Ok(())
}
