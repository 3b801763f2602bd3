//! Category summary report
//!
//! Totals expense amounts per category. Categories are grouped by exact
//! string match and kept in order of first appearance.

use std::collections::HashMap;

use crate::models::Expense;

/// Running total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name as recorded
    pub category: String,
    /// Sum of all amounts in this category
    pub total: f64,
}

/// Per-category totals
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    totals: Vec<CategoryTotal>,
}

impl CategorySummary {
    /// Summarize a list of expenses
    ///
    /// Returns `None` when there are no expenses to summarize.
    pub fn summarize(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            let slot = *index.entry(expense.category()).or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: expense.category().to_string(),
                    total: 0.0,
                });
                totals.len() - 1
            });

            totals[slot].total += expense.amount();
        }

        Some(Self { totals })
    }

    /// Totals in order of first appearance
    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }
}
