//! Path management for the expense tracker
//!
//! All files live in a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_TRACKER_DIR` environment variable
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

use super::settings::Settings;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for the data file, settings and audit log
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// Uses `data_dir` when given, otherwise the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                TrackerError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create TrackerPaths rooted at an explicit directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("expense-audit.log")
    }

    /// Get the path to the expense data file
    ///
    /// An absolute `data_file` setting is used as-is.
    pub fn expenses_file(&self, settings: &Settings) -> PathBuf {
        self.base_dir.join(&settings.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expense-tracker.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("expense-audit.log"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::new(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_defaults_to_working_directory() {
        let paths = TrackerPaths::new(None).unwrap();
        assert_eq!(paths.base_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_expenses_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(
            paths.expenses_file(&settings),
            temp_dir.path().join("expenses.txt")
        );

        let elsewhere = temp_dir.path().join("other").join("spending.txt");
        settings.data_file = elsewhere.clone();
        assert_eq!(paths.expenses_file(&settings), elsewhere);
    }
}
