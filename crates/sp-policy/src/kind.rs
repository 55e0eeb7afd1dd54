//! Policy codes as they appear in configuration files and commands.

use std::fmt;
use std::str::FromStr;

use sp_core::Scores;

use crate::{PolicyError, SelectionPolicy};

/// Which strategy a [`SelectionPolicy`] implements, without its state.
///
/// | Code(s)        | Kind             |
/// |----------------|------------------|
/// | `nve`, `nai`   | `Naive`          |
/// | `bal`          | `Balanced`       |
/// | `eco`          | `Economy`        |
/// | `env`, `sus`   | `Sustainability` |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyKind {
    Naive,
    Balanced,
    Economy,
    Sustainability,
}

impl PolicyKind {
    /// Canonical short code.
    pub fn code(self) -> &'static str {
        match self {
            PolicyKind::Naive          => "nve",
            PolicyKind::Balanced       => "bal",
            PolicyKind::Economy        => "eco",
            PolicyKind::Sustainability => "env",
        }
    }

    /// Display label, e.g. `"EconomySelection"`.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Naive          => "NaiveSelection",
            PolicyKind::Balanced       => "BalancedSelection",
            PolicyKind::Economy        => "EconomySelection",
            PolicyKind::Sustainability => "SustainabilitySelection",
        }
    }

    /// A fresh policy of this kind.  `Balanced` starts from zero totals.
    pub fn build(self) -> SelectionPolicy {
        match self {
            PolicyKind::Naive          => SelectionPolicy::naive(),
            PolicyKind::Balanced       => SelectionPolicy::balanced(Scores::ZERO),
            PolicyKind::Economy        => SelectionPolicy::economy(),
            PolicyKind::Sustainability => SelectionPolicy::sustainability(),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nve" | "nai" => Ok(PolicyKind::Naive),
            "bal"         => Ok(PolicyKind::Balanced),
            "eco"         => Ok(PolicyKind::Economy),
            "env" | "sus" => Ok(PolicyKind::Sustainability),
            other         => Err(PolicyError::UnknownCode(other.to_owned())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
