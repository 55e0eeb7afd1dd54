//! `sp-core` — foundational types for the settlement planner.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and a single external one (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PlanId`                                              |
//! | [`scores`]      | `Scores` (life-quality, economy, environment)         |
//! | [`settlement`]  | `Settlement`, `SettlementType`                        |
//! | [`facility`]    | `FacilityType`, `FacilityCategory`, `Facility`, `FacilityStatus` |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod facility;
pub mod ids;
pub mod scores;
pub mod settlement;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use facility::{Facility, FacilityCategory, FacilityStatus, FacilityType};
pub use ids::PlanId;
pub use scores::Scores;
pub use settlement::{Settlement, SettlementType};
