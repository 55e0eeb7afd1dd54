//! The `SelectionPolicy` enum.

use std::fmt;

use sp_core::{FacilityCategory, FacilityType, Scores};

use crate::{PolicyError, PolicyKind, PolicyResult};

/// A facility selection strategy together with its internal memory.
///
/// The set of strategies is fixed, so this is a closed enum rather than a
/// trait object: plans own their policy by value and cloning a plan clones the
/// policy state with it.
///
/// A call to [`select_facility`](Self::select_facility) that fails leaves the
/// policy exactly as it was.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPolicy {
    /// Round-robin through the catalog.  `last_selected` is `None` before the
    /// first pick.
    Naive { last_selected: Option<usize> },

    /// Keeps `totals` (seeded at construction, grown by every pick) as even
    /// as possible across the three dimensions.
    Balanced { totals: Scores },

    /// Cycles through `Economy` facility types.
    Economy { last_selected: Option<usize> },

    /// Cycles through `Environment` facility types.
    Sustainability { last_selected: Option<usize> },
}

impl SelectionPolicy {
    pub fn naive() -> Self {
        SelectionPolicy::Naive { last_selected: None }
    }

    /// Balanced policy whose running totals start at `seed`.
    pub fn balanced(seed: Scores) -> Self {
        SelectionPolicy::Balanced { totals: seed }
    }

    pub fn economy() -> Self {
        SelectionPolicy::Economy { last_selected: None }
    }

    pub fn sustainability() -> Self {
        SelectionPolicy::Sustainability { last_selected: None }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            SelectionPolicy::Naive { .. }          => PolicyKind::Naive,
            SelectionPolicy::Balanced { .. }       => PolicyKind::Balanced,
            SelectionPolicy::Economy { .. }        => PolicyKind::Economy,
            SelectionPolicy::Sustainability { .. } => PolicyKind::Sustainability,
        }
    }

    /// Pick the next facility type to build from `catalog`.
    ///
    /// Fails with [`PolicyError::EmptySelection`] if `catalog` is empty or,
    /// for `Economy`/`Sustainability`, holds no entry of the wanted category.
    /// `Balanced` fails with [`PolicyError::ScoreOverflow`] if adding any
    /// candidate would overflow its running totals.
    pub fn select_facility<'a>(
        &mut self,
        catalog: &'a [FacilityType],
    ) -> PolicyResult<&'a FacilityType> {
        if catalog.is_empty() {
            return Err(PolicyError::EmptySelection {
                policy: self.kind().label(),
                reason: "the facility catalog is empty",
            });
        }

        match self {
            SelectionPolicy::Naive { last_selected } => {
                let next = last_selected.map_or(0, |i| (i + 1) % catalog.len());
                *last_selected = Some(next);
                Ok(&catalog[next])
            }

            SelectionPolicy::Balanced { totals } => {
                let overflow = PolicyError::ScoreOverflow { policy: PolicyKind::Balanced.label() };
                // Ties go to the earliest candidate.
                let mut best: Option<(usize, Scores, u64)> = None;
                for (i, candidate) in catalog.iter().enumerate() {
                    let sum = totals.checked_add(candidate.scores()).ok_or(overflow.clone())?;
                    let range = sum.range();
                    if best.is_none_or(|(_, _, best_range)| range < best_range) {
                        best = Some((i, sum, range));
                    }
                }
                let (idx, sum, _) = best.ok_or(overflow)?;
                *totals = sum;
                Ok(&catalog[idx])
            }

            SelectionPolicy::Economy { last_selected } => {
                let idx = scan_category(catalog, *last_selected, FacilityCategory::Economy)
                    .ok_or(PolicyError::EmptySelection {
                        policy: PolicyKind::Economy.label(),
                        reason: "no facility type of category ECONOMY",
                    })?;
                *last_selected = Some(idx);
                Ok(&catalog[idx])
            }

            SelectionPolicy::Sustainability { last_selected } => {
                let idx = scan_category(catalog, *last_selected, FacilityCategory::Environment)
                    .ok_or(PolicyError::EmptySelection {
                        policy: PolicyKind::Sustainability.label(),
                        reason: "no facility type of category ENVIRONMENT",
                    })?;
                *last_selected = Some(idx);
                Ok(&catalog[idx])
            }
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().label())
    }
}

/// Index of the first entry of `category` strictly after `last`, wrapping
/// around the catalog once.  Starts at index 0 when `last` is `None`.
fn scan_category(
    catalog:  &[FacilityType],
    last:     Option<usize>,
    category: FacilityCategory,
) -> Option<usize> {
    let len = catalog.len();
    let start = last.map_or(0, |i| i + 1);
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&i| catalog[i].category() == category)
}
