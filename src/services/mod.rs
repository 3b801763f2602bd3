//! Service layer for the expense tracker
//!
//! Business logic on top of the storage layer.

pub mod expense;

pub use expense::{AddOutcome, ExpenseService};
