//! `sp-plan` — the per-settlement construction plan.
//!
//! # Crate layout
//!
//! | Module    | Contents                              |
//! |-----------|---------------------------------------|
//! | [`plan`]  | `Plan`, `PlanStatus`                  |
//! | [`error`] | `PlanError`, `PlanResult<T>`          |
//!
//! # Step model (summary)
//!
//! ```text
//! capacity = settlement type (village 1, city 2, metropolis 3)
//! while queue < capacity and catalog non-empty:
//!     queue.push(Facility::new(policy.select_facility(catalog)))
//! for facility in queue:
//!     if facility.step() == Operational:
//!         move to completed; scores += facility.scores (checked)
//! status = Busy if queue == capacity else Available
//! ```

pub mod error;
pub mod plan;


pub use error::{PlanError, PlanResult};
pub use plan::{Plan, PlanStatus};
