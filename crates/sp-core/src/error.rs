//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while constructing core value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid settlement type code {0}: expected 0 (village), 1 (city) or 2 (metropolis)")]
    InvalidSettlementType(i64),

    #[error("invalid facility category code {0}: expected 0 (life quality), 1 (economy) or 2 (environment)")]
    InvalidCategory(i64),

    #[error("facility type {name:?} has cost {cost}: cost must be positive")]
    InvalidCost { name: String, cost: i64 },

    #[error("facility type {name:?} has cost {cost}: cost must be at most {max}", max = u32::MAX)]
    CostTooLarge { name: String, cost: i64 },
}

/// Shorthand result type for `sp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
