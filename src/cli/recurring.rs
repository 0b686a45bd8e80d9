//! Recurring expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_recurring_list;
use crate::error::FinlightResult;
use crate::models::RecurringCategory;
use crate::services::LedgerService;

use super::parse_amount;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring monthly expense
    Add {
        /// Subscription name (e.g., "Netflix")
        name: String,
        /// Monthly cost
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Subscription, Rent, Utilities, Other)
        #[arg(short, long, default_value = "Subscription")]
        category: String,
    },

    /// List recurring expenses and their monthly total
    List,
}

/// Handle a recurring expense command
pub fn handle_recurring_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: RecurringCommands,
) -> FinlightResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecurringCommands::Add {
            name,
            amount,
            category,
        } => {
            let category: RecurringCategory = category.parse()?;
            let amount = parse_amount(&amount)?;

            let item = service.add_recurring(name, amount, category)?;
            println!(
                "Recurring expense added: {} ({}) {}/month",
                item.name,
                item.category,
                item.amount.format_with_symbol(symbol)
            );
        }

        RecurringCommands::List => {
            print!("{}", format_recurring_list(service.recurring(), symbol));
        }
    }

    Ok(())
}
