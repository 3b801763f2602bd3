//! Expense model
//!
//! A single dated, categorized amount. Expenses are immutable once built.

use serde::{Deserialize, Serialize};

/// One recorded expense
///
/// `date` is kept as the text the user typed (expected `YYYY-MM-DD`, not
/// validated). `category` is compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    date: String,
    category: String,
    amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}
