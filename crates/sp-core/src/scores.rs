//! The three scored dimensions shared by facility types, plans and the
//! balanced selection policy.
//!
//! Facility types carry `i32`-sized scores (that is all the config format
//! accepts) while the fields are `i64`, so running totals have headroom.
//! Addition is checked: no arithmetic here can panic or wrap.

use std::fmt;

/// Life-quality, economy and environment scores.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    pub life_quality: i64,
    pub economy:      i64,
    pub environment:  i64,
}

impl Scores {
    pub const ZERO: Scores = Scores::new(0, 0, 0);

    #[inline]
    pub const fn new(life_quality: i64, economy: i64, environment: i64) -> Self {
        Self { life_quality, economy, environment }
    }

    /// Per-dimension sum, or `None` if any dimension overflows.
    #[inline]
    pub fn checked_add(self, rhs: Scores) -> Option<Scores> {
        Some(Scores::new(
            self.life_quality.checked_add(rhs.life_quality)?,
            self.economy.checked_add(rhs.economy)?,
            self.environment.checked_add(rhs.environment)?,
        ))
    }

    /// Spread between the highest and lowest dimension.
    ///
    /// Zero means the three dimensions are perfectly even.
    #[inline]
    pub fn range(self) -> u64 {
        let max = self.life_quality.max(self.economy).max(self.environment);
        let min = self.life_quality.min(self.economy).min(self.environment);
        max.abs_diff(min)
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.life_quality, self.economy, self.environment)
    }
}
