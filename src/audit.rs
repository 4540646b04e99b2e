use crate::error::Result;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-only text log of completed top-level operations.
///
/// The caller invokes `record` after the ledger operation returns; the
/// ledger itself never logs.
pub struct AuditLog<W: Write> {
    sink: W,
}

impl AuditLog<File> {
    /// Opens the log file for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> AuditLog<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes one line: timestamp, operation name, arguments, outcome.
    pub fn record(&mut self, operation: &str, arguments: &str, outcome: &str) -> Result<()> {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            self.sink,
            "[{stamp}] operation '{operation}' called with {arguments} returned {outcome}"
        )?;
        Ok(())
    }
}
