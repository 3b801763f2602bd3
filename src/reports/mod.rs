//! Reports module for the expense tracker

pub mod summary;

pub use summary::{CategorySummary, CategoryTotal};
