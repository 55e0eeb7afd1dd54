//! The `OutputWriter` trait implemented by backend writers.

use crate::{CompletionRow, OutputResult, ScoreRow};

/// Sink for simulation output rows.
///
/// Errors are stored by the observer and retrieved with
/// [`ScoreObserver::take_error`](crate::ScoreObserver::take_error).
pub trait OutputWriter {
    /// Write one row per plan for a finished step.
    fn write_scores(&mut self, rows: &[ScoreRow]) -> OutputResult<()>;

    /// Write one completed-facility row.
    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
