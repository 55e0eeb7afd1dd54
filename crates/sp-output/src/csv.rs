//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `plan_scores.csv`
//! - `facility_completions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CompletionRow, OutputResult, ScoreRow};

pub const SCORES_FILE: &str = "plan_scores.csv";
pub const COMPLETIONS_FILE: &str = "facility_completions.csv";

pub struct CsvWriter {
    scores:      Writer<File>,
    completions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create both CSV files in `dir` (truncating old ones) and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut scores = Writer::from_path(dir.join(SCORES_FILE))?;
        scores.write_record([
            "step",
            "plan_id",
            "settlement",
            "life_quality",
            "economy",
            "environment",
            "under_construction",
            "operational",
        ])?;

        let mut completions = Writer::from_path(dir.join(COMPLETIONS_FILE))?;
        completions.write_record(["step", "plan_id", "settlement", "facility", "category"])?;

        Ok(Self { scores, completions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_scores(&mut self, rows: &[ScoreRow]) -> OutputResult<()> {
        for row in rows {
            self.scores.write_record(&[
                row.step.to_string(),
                row.plan_id.to_string(),
                row.settlement.clone(),
                row.life_quality.to_string(),
                row.economy.to_string(),
                row.environment.to_string(),
                row.under_construction.to_string(),
                row.operational.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()> {
        self.completions.write_record([
            row.step.to_string().as_str(),
            row.plan_id.to_string().as_str(),
            row.settlement.as_str(),
            row.facility.as_str(),
            row.category.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.scores.flush()?;
        self.completions.flush()?;
        Ok(())
    }
}
