//! Expense service
//!
//! Records new expenses: memory first, then the data file, then the audit
//! log. Neither write failing undoes the in-memory record.

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::{format_audit_error, format_save_error};
use crate::error::TrackerError;
use crate::models::Expense;
use crate::reports::CategorySummary;
use crate::storage::ExpenseStore;

/// Persistence problems hit while adding an expense
#[derive(Debug, Default)]
pub struct AddOutcome {
    pub save_error: Option<TrackerError>,
    pub audit_error: Option<TrackerError>,
}

impl AddOutcome {
    /// User-facing messages for every problem, in the order they happened
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(e) = &self.save_error {
            messages.push(format_save_error(e));
        }
        if let Some(e) = &self.audit_error {
            messages.push(format_audit_error(e));
        }
        messages
    }
}

/// Service for recording and summarizing expenses
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service; pass `None` to skip audit logging
    pub fn new(store: &'a mut ExpenseStore, audit: Option<&'a AuditLogger>) -> Self {
        Self { store, audit }
    }

    /// Add an expense, save, and audit it
    pub fn add(&mut self, date: &str, category: &str, amount: f64) -> AddOutcome {
        let mut outcome = AddOutcome {
            save_error: self.store.add(date, category, amount).err(),
            audit_error: None,
        };

        if let (Some(logger), Some(expense)) = (self.audit, self.store.last()) {
            let entry = AuditEntry::added(expense, self.store.len());
            outcome.audit_error = logger.log(&entry).err();
        }

        outcome
    }

    /// Everything recorded so far, or `None` when there is nothing
    pub fn list(&self) -> Option<&[Expense]> {
        self.store.list()
    }

    /// Per-category totals of everything recorded so far
    pub fn summarize(&self) -> Option<CategorySummary> {
        CategorySummary::summarize(self.store.expenses())
    }
}
