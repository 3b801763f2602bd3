use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::display::format_load_error;
use expense_tracker::shell::Shell;
use expense_tracker::storage::{ExpenseStore, LoadReport};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated, categorized expenses in a plain text file and \
                  shows the total spent per category. Run without a subcommand \
                  for the interactive menu."
)]
struct Cli {
    /// Directory holding the expense file, settings and audit log
    #[arg(long, env = "EXPENSE_TRACKER_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Expense file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "menu")]
    Shell,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Write a settings file and create an empty expense file
    Init {
        /// Currency symbol shown before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Decimal places shown for amounts
        #[arg(long)]
        decimals: Option<usize>,
        /// Record every added expense in the audit log
        #[arg(long)]
        audit: bool,
    },

    /// Show resolved paths, settings and recent audit history
    Config,
}

/// Audit entries shown by `config`
const RECENT_AUDIT_ENTRIES: usize = 5;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new(cli.data_dir)?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(file) = cli.file {
        settings.data_file = file;
    }

    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));
    let style = settings.amount_style();

    match cli.command {
        Some(Commands::Init {
            currency,
            decimals,
            audit,
        }) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            if let Some(symbol) = currency {
                settings.currency_symbol = symbol;
            }
            if let Some(places) = decimals {
                settings.decimal_places = places;
            }
            settings.audit_enabled |= audit;
            settings.save(&paths)?;

            let data_file = paths.expenses_file(&settings);
            if !data_file.exists() {
                ExpenseStore::new(data_file).save()?;
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expense file:   {}", paths.expenses_file(&settings).display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Decimal places:  {}", settings.decimal_places);
            println!("  Audit enabled:   {}", settings.audit_enabled);

            let history =
                AuditLogger::new(paths.audit_log()).read_history(Some(RECENT_AUDIT_ENTRIES))?;
            println!();
            println!("Audit history: {} entries", history.total);
            for entry in &history.entries {
                println!("  {}", entry.format_human_readable(&style));
            }
            if !history.corrupt_lines.is_empty() {
                println!("  ({} unreadable lines skipped)", history.corrupt_lines.len());
            }
        }
        Some(Commands::Expense(cmd)) => {
            let (mut store, report) = open_store(&paths, &settings);
            for err in &report.errors {
                println!("{}", format_load_error(err));
            }
            handle_expense_command(&mut store, audit.as_ref(), &style, cmd)?;
        }
        Some(Commands::Shell) | None => {
            let (mut store, report) = open_store(&paths, &settings);
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut shell = Shell::new(
                &mut store,
                audit.as_ref(),
                style,
                stdin.lock(),
                stdout.lock(),
            );
            shell.report_load(&report)?;
            shell.run()?;
        }
    }

    Ok(())
}

fn open_store(paths: &TrackerPaths, settings: &Settings) -> (ExpenseStore, LoadReport) {
    let mut store = ExpenseStore::new(paths.expenses_file(settings));
    let report = store.load();
    (store, report)
}
