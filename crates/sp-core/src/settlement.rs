//! Settlements and their size class.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Size class of a settlement.  Determines how many facilities a plan may
/// have under construction at once.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettlementType {
    Village,
    City,
    Metropolis,
}

impl SettlementType {
    /// Maximum simultaneous constructions for a plan in this settlement.
    #[inline]
    pub fn capacity(self) -> usize {
        match self {
            SettlementType::Village    => 1,
            SettlementType::City       => 2,
            SettlementType::Metropolis => 3,
        }
    }

    /// Decode the numeric code used by configuration files and commands.
    pub fn from_code(code: i64) -> CoreResult<Self> {
        match code {
            0 => Ok(SettlementType::Village),
            1 => Ok(SettlementType::City),
            2 => Ok(SettlementType::Metropolis),
            other => Err(CoreError::InvalidSettlementType(other)),
        }
    }

    /// Inverse of [`from_code`](Self::from_code).
    pub fn code(self) -> u8 {
        match self {
            SettlementType::Village    => 0,
            SettlementType::City       => 1,
            SettlementType::Metropolis => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettlementType::Village    => "VILLAGE",
            SettlementType::City       => "CITY",
            SettlementType::Metropolis => "METROPOLIS",
        }
    }
}

impl fmt::Display for SettlementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named settlement.  Immutable after creation; the name is its key.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    name: String,
    kind: SettlementType,
}

impl Settlement {
    pub fn new(name: impl Into<String>, kind: SettlementType) -> Self {
        Self { name: name.into(), kind }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> SettlementType {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }
}
