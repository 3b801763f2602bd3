//! Expense CLI commands
//!
//! Non-interactive counterparts of the menu entries, for scripting.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::display::{format_category_summary, format_expense_list, AmountStyle};
use crate::error::TrackerResult;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense date (YYYY-MM-DD, not checked)
        date: String,
        /// Category name
        category: String,
        /// Amount (negative values are allowed)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// List all expenses in the order they were added
    List,

    /// Show the total for each category
    Summary,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut ExpenseStore,
    audit: Option<&AuditLogger>,
    style: &AmountStyle,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let mut service = ExpenseService::new(store, audit);

    match cmd {
        ExpenseCommands::Add {
            date,
            category,
            amount,
        } => {
            let outcome = service.add(&date, &category, amount);
            for message in outcome.messages() {
                println!("{}", message);
            }
            if outcome.save_error.is_none() {
                println!("Expense added.");
            }
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_list(service.list(), style));
        }

        ExpenseCommands::Summary => {
            let summary = service.summarize();
            print!("{}", format_category_summary(summary.as_ref(), style));
        }
    }

    Ok(())
}
