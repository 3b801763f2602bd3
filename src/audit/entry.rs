//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::AmountStyle;
use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was added
    Add,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The expense as it was recorded
    pub expense: Expense,

    /// Number of expenses held after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_count: Option<usize>,
}

impl AuditEntry {
    /// Create an entry for a newly added expense
    pub fn added(expense: &Expense, expense_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            expense: expense.clone(),
            expense_count: Some(expense_count),
        }
    }

    /// One-line human readable form, amounts rendered in `style`
    pub fn format_human_readable(&self, style: &AmountStyle) -> String {
        let mut line = format!(
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense.date(),
            self.expense.category(),
            style.format(self.expense.amount())
        );
        if let Some(count) = self.expense_count {
            line.push_str(&format!(" ({} total)", count));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_added_entry() {
        let expense = Expense::new("2024-01-01", "Food", 12.5);
        let entry = AuditEntry::added(&expense, 3);

        assert_eq!(entry.operation, Operation::Add);
        assert_eq!(entry.expense, expense);
        assert_eq!(entry.expense_count, Some(3));
    }

    #[test]
    fn test_serializes_lowercase_operation() {
        let entry = AuditEntry::added(&Expense::new("2024-01-01", "Food", 1.0), 1);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["operation"], "add");
        assert_eq!(json["expense"]["category"], "Food");
    }

    #[test]
    fn test_human_readable() {
        let mut entry = AuditEntry::added(&Expense::new("2024-01-01", "Food", 12.5), 4);
        let text = entry.format_human_readable(&AmountStyle::default());
        assert!(text.ends_with(" UTC ADD 2024-01-01 Food $12.50 (4 total)"));

        entry.expense_count = None;
        let text = entry.format_human_readable(&AmountStyle::new("", 1));
        assert!(text.ends_with("ADD 2024-01-01 Food 12.5"));
    }
}
