//! Append-only audit log of recorded expenses
//!
//! One JSON object per line. Reading is lenient the same way loading the
//! expense file is: a line that does not parse is noted and skipped.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// What could be read back from the audit log
#[derive(Debug, Default)]
pub struct AuditHistory {
    /// Readable entries, oldest first (only the most recent when limited)
    pub entries: Vec<AuditEntry>,
    /// Readable entries in the whole log
    pub total: usize,
    /// 1-based line numbers that held something other than an entry
    pub corrupt_lines: Vec<usize>,
}

/// Writes and reads the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let json = serde_json::to_string(entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| TrackerError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Read the log back, keeping at most `limit` of the newest entries
    ///
    /// A log that was never written is an empty history.
    pub fn read_history(&self, limit: Option<usize>) -> TrackerResult<AuditHistory> {
        let mut history = AuditHistory::default();

        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(history),
            Err(e) => {
                return Err(TrackerError::Io(format!("Failed to open audit log: {}", e)));
            }
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => history.entries.push(entry),
                Err(_) => history.corrupt_lines.push(index + 1),
            }
        }

        history.total = history.entries.len();
        if let Some(limit) = limit {
            let start = history.total.saturating_sub(limit);
            history.entries.drain(..start);
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("expense-audit.log"));
        (logger, temp_dir)
    }

    fn log_expenses(logger: &AuditLogger, count: usize) {
        for i in 0..count {
            let expense = Expense::new("2024-01-01", format!("Cat {}", i), i as f64);
            logger.log(&AuditEntry::added(&expense, i + 1)).unwrap();
        }
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let expense = Expense::new("2024-01-01", "Food", 12.5);

        logger.log(&AuditEntry::added(&expense, 1)).unwrap();

        let history = logger.read_history(None).unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.entries[0].expense, expense);
        assert!(history.corrupt_lines.is_empty());
    }

    #[test]
    fn test_limit_keeps_newest() {
        let (logger, _temp) = create_test_logger();
        log_expenses(&logger, 10);

        let history = logger.read_history(Some(3)).unwrap();
        assert_eq!(history.total, 10);
        assert_eq!(history.entries.len(), 3);
        assert_eq!(history.entries[0].expense.category(), "Cat 7");
        assert_eq!(history.entries[2].expense.category(), "Cat 9");
    }

    #[test]
    fn test_missing_log_is_empty_history() {
        let (logger, _temp) = create_test_logger();

        let history = logger.read_history(Some(5)).unwrap();
        assert_eq!(history.total, 0);
        assert!(history.entries.is_empty());
    }

    #[test]
    fn test_corrupt_lines_skipped() {
        let (logger, temp) = create_test_logger();
        log_expenses(&logger, 1);

        let path = temp.path().join("expense-audit.log");
        let mut contents = fs::read_to_string(&path).unwrap();
        contents.push_str("{\"timestamp\": \"trunc\n\nnot json at all\n");
        fs::write(&path, contents).unwrap();
        log_expenses(&logger, 1);

        let history = logger.read_history(None).unwrap();
        assert_eq!(history.total, 2);
        assert_eq!(history.corrupt_lines, vec![2, 4]);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let (_logger, temp) = create_test_logger();
        let logger = AuditLogger::new(temp.path().to_path_buf());

        let result = logger.log(&AuditEntry::added(&Expense::new("d", "Food", 1.0), 1));
        assert!(matches!(result, Err(TrackerError::Io(_))));
    }
}
