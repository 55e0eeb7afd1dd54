//! `sp-policy` — strategies that decide which facility type a plan builds next.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`policy`] | `SelectionPolicy`, closed enum of the four strategies      |
//! | [`kind`]   | `PolicyKind`, policy codes (`nve`, `bal`, `eco`, `env`, …) |
//! | [`error`]  | `PolicyError`, `PolicyResult<T>`                            |
//!
//! # Strategies
//!
//! | Variant          | Rule                                                   |
//! |------------------|--------------------------------------------------------|
//! | `Naive`          | Round-robin over the catalog by index.                 |
//! | `Balanced`       | Candidate that keeps running totals most even.         |
//! | `Economy`        | Next `Economy` entry after the last pick, wrapping.    |
//! | `Sustainability` | Next `Environment` entry after the last pick, wrapping.|
//!
//! Every variant carries its own memory (cursor or running totals).  Cloning a
//! policy copies that memory, so a clone continues from where the original was
//! and the two evolve independently afterwards.

pub mod error;
pub mod kind;
pub mod policy;

#[cfg(test)]
mod tests;

pub use error::{PolicyError, PolicyResult};
pub use kind::PolicyKind;
pub use policy::SelectionPolicy;
