//! `sp-sim` — the simulation orchestrator.
//!
//! # Step loop
//!
//! ```text
//! step():
//!   ① Dry run  — step a scratch copy of every plan; any selection failure
//!                aborts here with the live state untouched.
//!   ② Commit   — step the live plans ordered by settlement registration
//!                (creation order within a settlement), reporting completed
//!                facilities and end-of-step state to the observer.
//! ```
//!
//! # State and backup
//!
//! Everything the simulation owns except the running flag and the backup slot
//! lives in [`SimState`], a plain value type.  `backup()` clones it into the
//! slot; `restore()` clones it back.  Live and backup states share nothing.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_core::{FacilityCategory, FacilityType, Scores, Settlement, SettlementType};
//! use sp_policy::SelectionPolicy;
//! use sp_sim::Simulation;
//!
//! let mut sim = Simulation::new();
//! sim.add_settlement(Settlement::new("KfarSPL", SettlementType::Village))?;
//! sim.add_facility(FacilityType::new("park", FacilityCategory::Environment, 2, Scores::new(1, 0, 3))?)?;
//! let id = sim.add_plan("KfarSPL", SelectionPolicy::naive())?;
//! sim.open()?;
//! sim.step_n(5)?;
//! println!("{}", sim.plan(id)?);
//! ```

pub mod error;
pub mod log;
pub mod observer;
pub mod sim;
pub mod summary;


pub use error::{SimError, SimResult};
pub use log::{ActionRecord, ActionStatus};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{SimState, Simulation};
pub use summary::PlanSummary;
