use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{format_cents, Entry, Ledger};

/// Column order of the CSV export. Field quoting follows standard CSV rules,
/// so free-form categories round-trip through any compliant reader.
pub const CSV_HEADER: [&str; 5] = ["ID", "Amount", "Category", "Date", "Type"];

/// Error raised when an export destination cannot be opened or written.
/// The only recoverable failure in the system; everything else is total.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create export file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write record: {0}")]
    Record(#[from] csv::Error),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Ledger snapshot for full JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

/// Exporter for serializing a ledger to tabular formats
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export entries to CSV format: one header record, then one record per
    /// entry in insertion order. Amounts carry exactly two fractional digits
    /// and dates are day-granular (YYYY-MM-DD). Returns the entry count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(CSV_HEADER)?;

        let mut count = 0;
        for entry in self.ledger.entries() {
            csv_writer.write_record([
                entry.id.to_string(),
                format_cents(entry.amount_cents),
                entry.category.clone(),
                entry.recorded_at.format("%Y-%m-%d").to_string(),
                entry.kind.clone(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export entries to a CSV file, truncating any existing content.
    ///
    /// A failure partway through leaves the partial output on disk; the file
    /// handle is released on every path.
    pub fn export_csv_file(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.export_csv(file)
    }

    /// Export the whole ledger as a JSON snapshot
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot, ExportError> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            entries: self.ledger.entries().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
