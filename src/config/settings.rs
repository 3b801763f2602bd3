//! User settings for the expense tracker
//!
//! Settings are optional. When `expense-tracker.json` is absent every field
//! takes its default and nothing is written to disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::display::AmountStyle;
use crate::error::TrackerError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expense data file, relative to the base directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Digits shown after the decimal point
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Whether added expenses are recorded in the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_file() -> PathBuf {
    PathBuf::from("expenses.txt")
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_decimal_places() -> usize {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: default_data_file(),
            currency_symbol: default_currency(),
            decimal_places: default_decimal_places(),
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        std::fs::create_dir_all(paths.base_dir()).map_err(|e| {
            TrackerError::Io(format!("Failed to create base directory: {}", e))
        })?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// How amounts should be rendered for this user
    pub fn amount_style(&self) -> AmountStyle {
        AmountStyle::new(self.currency_symbol.clone(), self.decimal_places)
    }
}
