//! Verdict output port for writing evaluation records.

use crate::domain::EvaluationRecord;

/// Port for outputting evaluation records.
pub trait VerdictOutput: Send + Sync {
    /// Writes a single evaluation record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, record: &EvaluationRecord) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
