//! Expense display formatting
//!
//! Produces the exact lines the menu prints for listings, summaries and
//! persistence problems.

use std::fmt::Write as _;

use crate::error::TrackerError;
use crate::models::Expense;
use crate::reports::CategorySummary;

/// Shown by both the listing and the summary when nothing is recorded
pub const NO_EXPENSES: &str = "No expenses found.";

/// How monetary amounts are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountStyle {
    symbol: String,
    decimal_places: usize,
}

impl AmountStyle {
    pub fn new(symbol: impl Into<String>, decimal_places: usize) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places,
        }
    }

    /// Render an amount, e.g. `$19.75`
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.*}", self.symbol, self.decimal_places, amount)
    }
}

impl Default for AmountStyle {
    fn default() -> Self {
        Self::new("$", 2)
    }
}

/// Format one expense line
pub fn format_expense_line(expense: &Expense, style: &AmountStyle) -> String {
    format!(
        "Date: {}, Category: {}, Amount: {}",
        expense.date(),
        expense.category(),
        style.format(expense.amount())
    )
}

/// Format the expense listing, one line per expense
pub fn format_expense_list(expenses: Option<&[Expense]>, style: &AmountStyle) -> String {
    let Some(expenses) = expenses else {
        return format!("{}\n", NO_EXPENSES);
    };

    let mut output = String::new();
    for expense in expenses {
        let _ = writeln!(output, "{}", format_expense_line(expense, style));
    }
    output
}

/// Format the category summary, one line per category
pub fn format_category_summary(summary: Option<&CategorySummary>, style: &AmountStyle) -> String {
    let Some(summary) = summary else {
        return format!("{}\n", NO_EXPENSES);
    };

    let mut output = String::new();
    for total in summary.totals() {
        let _ = writeln!(
            output,
            "Category: {}, Total: {}",
            total.category,
            style.format(total.total)
        );
    }
    output
}

pub fn format_load_error(err: &TrackerError) -> String {
    format!("Error loading expenses from file: {}", err)
}

pub fn format_save_error(err: &TrackerError) -> String {
    format!("Error saving expenses to file: {}", err)
}

pub fn format_audit_error(err: &TrackerError) -> String {
    format!("Error writing audit log: {}", err)
}
