//! Facility types (catalog entries) and facilities (construction instances).
//!
//! # Lifecycle
//!
//! ```text
//! FacilityType ──Facility::new──▶ UnderConstruction(time_left = cost)
//!                                   │ step() × cost
//!                                   ▼
//!                                 Operational   (terminal)
//! ```

use std::fmt;

use crate::{CoreError, CoreResult, Scores};

// ── FacilityCategory ──────────────────────────────────────────────────────────

/// The dimension a facility type primarily serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacilityCategory {
    LifeQuality,
    Economy,
    Environment,
}

impl FacilityCategory {
    /// Decode the numeric code used by configuration files and commands.
    pub fn from_code(code: i64) -> CoreResult<Self> {
        match code {
            0 => Ok(FacilityCategory::LifeQuality),
            1 => Ok(FacilityCategory::Economy),
            2 => Ok(FacilityCategory::Environment),
            other => Err(CoreError::InvalidCategory(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            FacilityCategory::LifeQuality => 0,
            FacilityCategory::Economy     => 1,
            FacilityCategory::Environment => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacilityCategory::LifeQuality => "LIFE_QUALITY",
            FacilityCategory::Economy     => "ECONOMY",
            FacilityCategory::Environment => "ENVIRONMENT",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FacilityType ──────────────────────────────────────────────────────────────

/// Immutable catalog entry describing something a plan can build.
///
/// `cost` doubles as the construction duration: a facility of cost `n`
/// becomes operational after exactly `n` steps.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityType {
    name:     String,
    category: FacilityCategory,
    cost:     u32,
    scores:   Scores,
}

impl FacilityType {
    /// Create a facility type.  Fails with [`CoreError::InvalidCost`] if
    /// `cost` is not positive and [`CoreError::CostTooLarge`] if it does not
    /// fit in a `u32`.
    pub fn new(
        name:     impl Into<String>,
        category: FacilityCategory,
        cost:     i64,
        scores:   Scores,
    ) -> CoreResult<Self> {
        let name = name.into();
        if cost <= 0 {
            return Err(CoreError::InvalidCost { name, cost });
        }
        let Ok(cost) = u32::try_from(cost) else {
            return Err(CoreError::CostTooLarge { name, cost });
        };
        Ok(Self { name, category, cost, scores })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> FacilityCategory {
        self.category
    }

    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }
}

// ── Facility ──────────────────────────────────────────────────────────────────

/// Construction status of a [`Facility`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacilityStatus {
    UnderConstruction,
    Operational,
}

impl FacilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityStatus::UnderConstruction => "UNDER_CONSTRUCTION",
            FacilityStatus::Operational       => "OPERATIONAL",
        }
    }
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A facility type being built (or already built) in a specific settlement.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    kind:            FacilityType,
    settlement_name: String,
    status:          FacilityStatus,
    time_left:       u32,
}

impl Facility {
    /// Start construction of `kind` in `settlement_name`.
    pub fn new(kind: FacilityType, settlement_name: impl Into<String>) -> Self {
        let time_left = kind.cost();
        Self {
            kind,
            settlement_name: settlement_name.into(),
            status: FacilityStatus::UnderConstruction,
            time_left,
        }
    }

    /// Advance construction by one step and return the resulting status.
    ///
    /// Once `Operational`, further calls change nothing.
    pub fn step(&mut self) -> FacilityStatus {
        if self.status == FacilityStatus::UnderConstruction && self.time_left > 0 {
            self.time_left -= 1;
            if self.time_left == 0 {
                self.status = FacilityStatus::Operational;
            }
        }
        self.status
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    #[inline]
    pub fn facility_type(&self) -> &FacilityType {
        &self.kind
    }

    #[inline]
    pub fn settlement_name(&self) -> &str {
        &self.settlement_name
    }

    #[inline]
    pub fn status(&self) -> FacilityStatus {
        self.status
    }

    #[inline]
    pub fn is_operational(&self) -> bool {
        self.status == FacilityStatus::Operational
    }

    #[inline]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.kind.scores()
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FacilityName: {}\nFacilityStatus: {}",
            self.kind.name(),
            self.status,
        )
    }
}
