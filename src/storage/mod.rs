//! Storage layer for the expense tracker
//!
//! Provides the flat-file expense store with atomic whole-file writes.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadReport};
