//! `sp-output` — simulation output writers.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `plan_scores.csv`, `facility_completions.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by [`ScoreObserver`],
//! which implements `sp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvWriter, ScoreObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = ScoreObserver::new(writer);
//! sim.step_n_with(10, &mut obs).unwrap();
//! sim.close_with(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScoreObserver;
pub use row::{CompletionRow, ScoreRow};
pub use writer::OutputWriter;
