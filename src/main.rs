use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finlight::cli::{
    handle_allowance_command, handle_expense_command, handle_export_command,
    handle_recurring_command, handle_report_command, AllowanceCommands, ExpenseCommands,
    ExportFormat, RecurringCommands, ReportKind,
};
use finlight::config::{FinlightPaths, Settings, SummaryScope};
use finlight::services::LedgerService;
use finlight::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "finlight",
    version,
    about = "Monthly allowance tracker with spending forecasts",
    long_about = "FinLight tracks a monthly allowance, your expenses and recurring \
                  subscriptions, and tells you how long your budget will last at \
                  the current rate of spending."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly allowance commands
    #[command(subcommand)]
    Allowance(AllowanceCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Recurring monthly expense commands
    #[command(subcommand)]
    Recurring(RecurringCommands),

    /// When will you run out of money?
    Forecast {
        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Total spent and remaining budget
    Summary {
        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Spending per category
    Breakdown,

    /// Forecast, summary and breakdown together
    Report {
        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Spending scope of the remaining-budget figure
        #[arg(long, value_enum)]
        scope: Option<SummaryScope>,

        /// Currency symbol shown in front of amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    finlight::logging::init_tracing();
    let cli = Cli::parse();

    let paths = FinlightPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let mut service = LedgerService::open(LedgerStore::new(paths.ledger_file()));

    match cli.command {
        Some(Commands::Allowance(cmd)) => handle_allowance_command(&mut service, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&mut service, &settings, cmd)?,
        Some(Commands::Recurring(cmd)) => handle_recurring_command(&mut service, &settings, cmd)?,
        Some(Commands::Forecast { as_of }) => {
            handle_report_command(&service, &settings, ReportKind::Forecast, as_of.as_deref())?
        }
        Some(Commands::Summary { as_of }) => {
            handle_report_command(&service, &settings, ReportKind::Summary, as_of.as_deref())?
        }
        Some(Commands::Breakdown) => {
            handle_report_command(&service, &settings, ReportKind::Breakdown, None)?
        }
        Some(Commands::Report { as_of }) => {
            handle_report_command(&service, &settings, ReportKind::Full, as_of.as_deref())?
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => handle_export_command(&service, output, format, pretty)?,
        Some(Commands::Config { scope, currency }) => {
            if scope.is_some() || currency.is_some() {
                if let Some(scope) = scope {
                    settings.summary_scope = scope;
                }
                if let Some(currency) = currency {
                    settings.currency_symbol = currency;
                }
                settings.save(&paths)?;
                println!("Settings saved.");
                println!();
            }

            println!("FinLight Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Summary scope:   {}", settings.summary_scope);
        }
        None => {
            println!("FinLight - monthly allowance tracker");
            println!();
            println!("Run 'finlight --help' for usage information.");
            println!("Run 'finlight report' for your current forecast.");
        }
    }

    Ok(())
}
