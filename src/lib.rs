//! Expense Tracker - terminal-based personal expense tracking
//!
//! Records dated, categorized amounts in a flat text file and reports the
//! total spent per category.
//!
//! # Architecture
//!
//! - `config`: Base directory and optional settings
//! - `error`: Custom error types
//! - `models`: The `Expense` record
//! - `storage`: Flat-file expense store
//! - `reports`: Category summaries
//! - `services`: Adding expenses with save and audit
//! - `audit`: Append-only audit log
//! - `display`: Terminal output formatting
//! - `shell`: Interactive menu loop
//! - `cli`: Non-interactive subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::storage::ExpenseStore;
//! use expense_tracker::reports::CategorySummary;
//!
//! let mut store = ExpenseStore::new("expenses.txt".into());
//! store.load();
//! store.add("2024-01-01", "Food", 12.50)?;
//! let summary = CategorySummary::summarize(store.expenses());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::TrackerError;
