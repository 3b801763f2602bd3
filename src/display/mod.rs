//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_audit_error, format_category_summary, format_expense_line, format_expense_list,
    format_load_error, format_save_error, AmountStyle, NO_EXPENSES,
};
