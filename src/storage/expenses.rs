//! Expense store backed by the flat expense file
//!
//! Owns the in-memory expense list. Every change rewrites the whole file.

use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

use super::file_io::{read_expenses, write_expenses_atomic};

/// Outcome of loading the expense file
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Expenses now held in memory
    pub loaded: usize,
    /// Lines silently dropped for having the wrong number of fields
    pub skipped: usize,
    /// Problems worth telling the user about
    pub errors: Vec<TrackerError>,
}

/// In-memory expense list with whole-file persistence
///
/// Memory is the source of truth for the session. Persistence failures are
/// returned to the caller to report, never panicked on.
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store for the given file (nothing is read yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    /// Load expenses from disk, replacing anything held in memory
    ///
    /// Never fails: a missing or unreadable file leaves the store with
    /// whatever could be read, and the reason is in the report.
    pub fn load(&mut self) -> LoadReport {
        self.expenses.clear();

        match read_expenses(&self.path) {
            Ok(file) => {
                self.expenses = file.expenses;
                LoadReport {
                    loaded: self.expenses.len(),
                    skipped: file.skipped,
                    errors: file.errors,
                }
            }
            Err(e) => LoadReport {
                errors: vec![e],
                ..LoadReport::default()
            },
        }
    }

    /// Add an expense and rewrite the file
    ///
    /// The expense stays in memory even when the save fails.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> TrackerResult<()> {
        self.expenses.push(Expense::new(date, category, amount));
        self.save()
    }

    /// Write every expense to disk, overwriting the file
    pub fn save(&self) -> TrackerResult<()> {
        write_expenses_atomic(&self.path, &self.expenses)
    }

    /// All expenses in insertion order, or `None` when there are none
    pub fn list(&self) -> Option<&[Expense]> {
        if self.is_empty() {
            None
        } else {
            Some(&self.expenses)
        }
    }

    /// All expenses in insertion order (possibly empty)
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The most recently added expense
    pub fn last(&self) -> Option<&Expense> {
        self.expenses.last()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
