//! `ScoreObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sp_core::{Facility, PlanId};
use sp_plan::Plan;
use sp_sim::{PlanSummary, SimObserver};

use crate::row::{CompletionRow, ScoreRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes per-step plan scores and facility
/// completions to any [`OutputWriter`].
///
/// `SimObserver` methods return nothing, so writer errors are kept here; check
/// [`take_error`](Self::take_error) after stepping or closing.  The writer is
/// flushed when the simulation closes.
pub struct ScoreObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScoreObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ScoreObserver<W> {
    fn on_facility_completed(&mut self, step: u64, plan: PlanId, facility: &Facility) {
        let result = self.writer.write_completion(&CompletionRow::new(step, plan, facility));
        self.store_err(result);
    }

    fn on_step_end(&mut self, step: u64, plans: &[Plan]) {
        if plans.is_empty() {
            return;
        }
        let rows: Vec<ScoreRow> = plans.iter().map(|p| ScoreRow::from_plan(step, p)).collect();
        let result = self.writer.write_scores(&rows);
        self.store_err(result);
    }

    fn on_close(&mut self, _summaries: &[PlanSummary]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
