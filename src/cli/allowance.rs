//! Allowance CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FinlightResult;
use crate::services::LedgerService;

use super::parse_amount;

/// Allowance subcommands
#[derive(Subcommand)]
pub enum AllowanceCommands {
    /// Set the monthly allowance
    Set {
        /// Allowance amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current monthly allowance
    Show,
}

/// Handle an allowance command
pub fn handle_allowance_command(
    service: &mut LedgerService,
    settings: &Settings,
    cmd: AllowanceCommands,
) -> FinlightResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AllowanceCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let previous = service.set_allowance(amount)?;
            println!(
                "Monthly allowance set to {} (was {})",
                amount.format_with_symbol(symbol),
                previous.format_with_symbol(symbol)
            );
        }

        AllowanceCommands::Show => {
            println!(
                "Monthly allowance: {}",
                service.allowance().format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
