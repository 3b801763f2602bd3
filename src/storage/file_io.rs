//! Flat expense file I/O with atomic writes
//!
//! The file holds one `date,category,amount` line per expense. There is no
//! header and no quoting: a comma inside a date or category corrupts that
//! line on the next load.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::Expense;

/// Expenses recovered from a file, plus what had to be left behind
#[derive(Debug, Default)]
pub struct ExpenseFile {
    /// Well-formed expenses in file order
    pub expenses: Vec<Expense>,
    /// Lines dropped for having other than three fields
    pub skipped: usize,
    /// Lines that had three fields but could not be used
    pub errors: Vec<TrackerError>,
}

/// Read every expense from a file
///
/// A missing or unopenable file is an error. Problems with individual lines
/// are collected in the result instead.
pub fn read_expenses<P: AsRef<Path>>(path: P) -> Result<ExpenseFile, TrackerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrackerError::data_file_not_found(path));
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(parse_expenses(BufReader::new(file)))
}

/// Parse expense lines from any reader
///
/// Blank lines are ignored without being counted as skipped. A read failure
/// part way through keeps what was parsed before it.
pub fn parse_expenses<R: Read>(reader: R) -> ExpenseFile {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut parsed = ExpenseFile::default();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                parsed
                    .errors
                    .push(TrackerError::Storage(format!("Failed to read: {}", e)));
                break;
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                parsed.errors.push(TrackerError::Parse {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // Trailing empty fields do not count: `a,b,` has two fields, `a,b,5,` three
        let fields = record
            .as_byte_record()
            .iter()
            .rposition(|f| !f.is_empty())
            .map_or(0, |last| last + 1);
        if fields != 3 {
            parsed.skipped += 1;
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        match parse_amount(&record[2]) {
            Ok(amount) => parsed
                .expenses
                .push(Expense::new(&record[0], &record[1], amount)),
            Err(reason) => parsed.errors.push(TrackerError::Parse { line, reason }),
        }
    }

    parsed
}

/// Parse a stored or typed amount, ignoring surrounding whitespace
pub fn parse_amount(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid amount '{}'", text))
}

/// Write all expenses to a file atomically (write to temp, then rename)
///
/// The previous file is replaced as a whole. On failure it is left untouched.
pub fn write_expenses_atomic<P: AsRef<Path>>(
    path: P,
    expenses: &[Expense],
) -> Result<(), TrackerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_expenses(&mut writer, expenses)?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Serialize expenses as `date,category,amount` lines
pub fn write_expenses<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), TrackerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for expense in expenses {
        let amount = expense.amount().to_string();
        wtr.write_record([expense.date(), expense.category(), amount.as_str()])
            .map_err(|e| TrackerError::Storage(format!("Failed to write expense: {}", e)))?;
    }

    wtr.flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
