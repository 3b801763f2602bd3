//! Interactive menu shell
//!
//! Drives the text menu over any line reader and writer. The loop moves
//! between states until the user exits or input runs out:
//!
//! ```text
//! AwaitingChoice -> Add | List | Summary -> AwaitingChoice
//! AwaitingChoice -> Exit
//! ```

pub mod menu;

use std::io::{BufRead, Write};

use crate::audit::AuditLogger;
use crate::display::{format_category_summary, format_expense_list, format_load_error, AmountStyle};
use crate::error::TrackerResult;
use crate::services::ExpenseService;
use crate::storage::{file_io::parse_amount, ExpenseStore, LoadReport};

use menu::{
    parse_choice, MenuChoice, ParsedChoice, AMOUNT_PROMPT, CATEGORY_PROMPT, CHOICE_PROMPT, DATE_PROMPT, FAREWELL,
    INVALID_AMOUNT, INVALID_NUMBER, INVALID_OPTION, MENU,
};

/// Where the menu loop is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingChoice,
    Add,
    List,
    Summary,
    Exit,
}

impl From<MenuChoice> for ShellState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Add => Self::Add,
            MenuChoice::List => Self::List,
            MenuChoice::Summary => Self::Summary,
            MenuChoice::Exit => Self::Exit,
        }
    }
}

/// The interactive expense menu
pub struct Shell<'a, R, W> {
    store: &'a mut ExpenseStore,
    audit: Option<&'a AuditLogger>,
    style: AmountStyle,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        store: &'a mut ExpenseStore,
        audit: Option<&'a AuditLogger>,
        style: AmountStyle,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            audit,
            style,
            input,
            output,
        }
    }

    /// Print any problems hit while loading the store
    pub fn report_load(&mut self, report: &LoadReport) -> TrackerResult<()> {
        for err in &report.errors {
            writeln!(self.output, "{}", format_load_error(err))?;
        }
        Ok(())
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        let mut state = ShellState::AwaitingChoice;
        while state != ShellState::Exit {
            state = self.step(state)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Handle one state and return the next
    pub fn step(&mut self, state: ShellState) -> TrackerResult<ShellState> {
        match state {
            ShellState::AwaitingChoice => self.await_choice(),
            ShellState::Add => self.add_flow(),
            ShellState::List => {
                let listing = format_expense_list(self.store.list(), &self.style);
                write!(self.output, "{}", listing)?;
                Ok(ShellState::AwaitingChoice)
            }
            ShellState::Summary => {
                let summary = ExpenseService::new(&mut *self.store, self.audit).summarize();
                let text = format_category_summary(summary.as_ref(), &self.style);
                write!(self.output, "{}", text)?;
                Ok(ShellState::AwaitingChoice)
            }
            ShellState::Exit => Ok(ShellState::Exit),
        }
    }

    fn await_choice(&mut self) -> TrackerResult<ShellState> {
        write!(self.output, "{}", MENU)?;
        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(ShellState::Exit);
        };

        match parse_choice(&line) {
            ParsedChoice::Choice(MenuChoice::Exit) => {
                writeln!(self.output, "{}", FAREWELL)?;
                Ok(ShellState::Exit)
            }
            ParsedChoice::Choice(choice) => Ok(choice.into()),
            ParsedChoice::Unknown(_) => {
                writeln!(self.output, "{}", INVALID_OPTION)?;
                Ok(ShellState::AwaitingChoice)
            }
            ParsedChoice::NotANumber => {
                writeln!(self.output, "{}", INVALID_NUMBER)?;
                Ok(ShellState::AwaitingChoice)
            }
        }
    }

    fn add_flow(&mut self) -> TrackerResult<ShellState> {
        let Some(date) = self.prompt(DATE_PROMPT)? else {
            return Ok(ShellState::Exit);
        };
        let Some(category) = self.prompt(CATEGORY_PROMPT)? else {
            return Ok(ShellState::Exit);
        };

        let amount = loop {
            let Some(text) = self.prompt(AMOUNT_PROMPT)? else {
                return Ok(ShellState::Exit);
            };
            match parse_amount(&text) {
                Ok(amount) => break amount,
                Err(_) => writeln!(self.output, "{}", INVALID_AMOUNT)?,
            }
        };

        let mut service = ExpenseService::new(&mut *self.store, self.audit);
        let outcome = service.add(&date, &category, amount);
        for message in outcome.messages() {
            writeln!(self.output, "{}", message)?;
        }

        Ok(ShellState::AwaitingChoice)
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(store: &mut ExpenseStore, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(
            store,
            None,
            AmountStyle::default(),
            Cursor::new(script.as_bytes()),
            &mut output,
        )
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.txt"));
        (temp_dir, store)
    }

    #[test]
    fn test_exit_prints_menu_and_farewell() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "4\n");

        assert_eq!(output, format!("{}{}{}\n", MENU, CHOICE_PROMPT, FAREWELL));
    }

    #[test]
    fn test_empty_list_and_summary() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "2\n3\n4\n");

        assert_eq!(output.matches("No expenses found.\n").count(), 2);
    }

    #[test]
    fn test_scenario() {
        let (temp_dir, mut store) = create_test_store();
        let script = "1\n2024-01-01\nFood\n12.50\n\
                      1\n2024-01-02\nFood\n7.25\n\
                      1\n2024-01-03\nTransport\n20.00\n\
                      2\n3\n4\n";
        let output = run_script(&mut store, script);

        let first = output
            .find("Date: 2024-01-01, Category: Food, Amount: $12.50\n")
            .unwrap();
        let second = output
            .find("Date: 2024-01-02, Category: Food, Amount: $7.25\n")
            .unwrap();
        let third = output
            .find("Date: 2024-01-03, Category: Transport, Amount: $20.00\n")
            .unwrap();
        assert!(first < second && second < third);

        assert!(output.contains("Category: Food, Total: $19.75\n"));
        assert!(output.contains("Category: Transport, Total: $20.00\n"));

        let saved = fs::read_to_string(temp_dir.path().join("expenses.txt")).unwrap();
        assert_eq!(saved.lines().count(), 3);
    }

    #[test]
    fn test_invalid_option_and_non_numeric_choice() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "7\nabc\n4\n");

        assert!(output.contains(INVALID_OPTION));
        assert!(output.contains(INVALID_NUMBER));
        assert_eq!(output.matches(MENU).count(), 3);
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_bad_amount_reprompts() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "1\n2024-01-01\nFood\nten\n10\n4\n");

        assert!(output.contains(INVALID_AMOUNT));
        assert_eq!(output.matches(AMOUNT_PROMPT).count(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.expenses()[0].amount(), 10.0);
    }

    #[test]
    fn test_date_and_category_kept_as_typed() {
        let (_temp_dir, mut store) = create_test_store();
        run_script(&mut store, "1\nyesterday\n  Fun Stuff \n-3.5\r\n4\n");

        let expense = &store.expenses()[0];
        assert_eq!(expense.date(), "yesterday");
        assert_eq!(expense.category(), "  Fun Stuff ");
        assert_eq!(expense.amount(), -3.5);
    }

    #[test]
    fn test_end_of_input_exits_quietly() {
        let (_temp_dir, mut store) = create_test_store();
        let output = run_script(&mut store, "1\n2024-01-01\n");

        assert!(!output.contains(FAREWELL));
        assert!(store.is_empty());
    }

    #[test]
    fn test_report_load_prints_errors() {
        let (_temp_dir, mut store) = create_test_store();
        let report = store.load();

        let mut output = Vec::new();
        let mut shell = Shell::new(
            &mut store,
            None,
            AmountStyle::default(),
            Cursor::new(&b""[..]),
            &mut output,
        );
        shell.report_load(&report).unwrap();
        drop(shell);

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Error loading expenses from file: Data file not found: "));
    }

    #[test]
    fn test_step_from_exit_stays_exit() {
        let (_temp_dir, mut store) = create_test_store();
        let mut output = Vec::new();
        let mut shell = Shell::new(
            &mut store,
            None,
            AmountStyle::default(),
            Cursor::new(&b""[..]),
            &mut output,
        );
        assert_eq!(shell.step(ShellState::Exit).unwrap(), ShellState::Exit);
    }
}
