//! Menu text and choice parsing

/// Menu printed before every choice, starting with a blank line
pub const MENU: &str = "\nExpense Tracker Menu:\n\
                        1. Add Expense\n\
                        2. List Expenses\n\
                        3. Show Category-wise Summation\n\
                        4. Exit\n";

pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const DATE_PROMPT: &str = "Enter date (YYYY-MM-DD): ";
pub const CATEGORY_PROMPT: &str = "Enter category: ";
pub const AMOUNT_PROMPT: &str = "Enter amount: ";

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
pub const INVALID_AMOUNT: &str = "Invalid amount. Please enter a number.";
pub const FAREWELL: &str = "Exiting...";

/// A menu entry the user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Summary,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Summary),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What a typed menu line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedChoice {
    Choice(MenuChoice),
    /// An integer with no menu entry
    Unknown(i64),
    NotANumber,
}

/// Parse a typed menu choice, ignoring surrounding whitespace
pub fn parse_choice(input: &str) -> ParsedChoice {
    match input.trim().parse::<i64>() {
        Ok(n) => MenuChoice::from_number(n).map_or(ParsedChoice::Unknown(n), ParsedChoice::Choice),
        Err(_) => ParsedChoice::NotANumber,
    }
}
