//! The `Plan` state machine.

use std::fmt;

use sp_core::{Facility, FacilityStatus, FacilityType, PlanId, Scores, Settlement};
use sp_policy::SelectionPolicy;

use crate::{PlanError, PlanResult};

// ── PlanStatus ────────────────────────────────────────────────────────────────

/// Whether a plan has room for more construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanStatus {
    #[default]
    Available,
    Busy,
}

impl PlanStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanStatus::Available => "AVAILABLE",
            PlanStatus::Busy      => "BUSY",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Plan ──────────────────────────────────────────────────────────────────────

/// Construction schedule for one settlement.
///
/// A plan owns everything it touches by value: its copy of the settlement, its
/// selection policy, the catalog snapshot taken at creation, and every
/// facility it has started.  Cloning a plan therefore yields a fully
/// independent copy.
///
/// # Invariants
///
/// - `under_construction.len() <= settlement.capacity()` at all times.
/// - Every facility in `facilities` has had its scores added to `scores`
///   exactly once, at the step it became operational.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    id:                 PlanId,
    settlement:         Settlement,
    policy:             SelectionPolicy,
    /// Facility types this plan may build.  Captured when the plan is created;
    /// types registered later are not visible here.
    catalog:            Vec<FacilityType>,
    status:             PlanStatus,
    under_construction: Vec<Facility>,
    /// Operational facilities, in completion order.
    facilities:         Vec<Facility>,
    scores:             Scores,
}

impl Plan {
    pub fn new(
        id:         PlanId,
        settlement: Settlement,
        policy:     SelectionPolicy,
        catalog:    Vec<FacilityType>,
    ) -> Self {
        Self {
            id,
            settlement,
            policy,
            catalog,
            status:             PlanStatus::Available,
            under_construction: Vec::new(),
            facilities:         Vec::new(),
            scores:             Scores::ZERO,
        }
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the plan by one simulation step.
    ///
    /// Returns the number of facilities that became operational during this
    /// step; they are the last `n` entries of [`facilities`](Self::facilities).
    ///
    /// Fails without touching the plan (policy memory included) if the
    /// policy cannot fill the queue ([`PlanError::Selection`]) or if the
    /// running scores would overflow ([`PlanError::ScoreOverflow`]).
    pub fn step(&mut self) -> PlanResult<usize> {
        let capacity = self.capacity();

        // ── Top up the construction queue ─────────────────────────────────
        //
        // Everything below works on scratch copies that are committed only
        // once the whole step has succeeded.
        let mut policy = self.policy.clone();
        let mut queue = self.under_construction.clone();
        while queue.len() < capacity && !self.catalog.is_empty() {
            let kind = policy
                .select_facility(&self.catalog)
                .map_err(|source| PlanError::Selection { plan: self.id, source })?;
            queue.push(Facility::new(kind.clone(), self.settlement.name()));
        }

        // ── Advance construction ──────────────────────────────────────────
        let mut scores = self.scores;
        let mut building = Vec::with_capacity(queue.len());
        let mut finished = Vec::new();
        for mut facility in queue {
            if facility.step() == FacilityStatus::Operational {
                scores = scores
                    .checked_add(facility.scores())
                    .ok_or(PlanError::ScoreOverflow { plan: self.id })?;
                finished.push(facility);
            } else {
                building.push(facility);
            }
        }

        let completed = finished.len();
        self.policy = policy;
        self.scores = scores;
        self.under_construction = building;
        self.facilities.extend(finished);
        self.status = if self.under_construction.len() == capacity {
            PlanStatus::Busy
        } else {
            PlanStatus::Available
        };

        Ok(completed)
    }

    /// Replace the selection policy with an independent copy of `policy`.
    ///
    /// Facilities already queued are unaffected; the new policy is consulted
    /// from the next [`step`](Self::step) on.
    pub fn set_selection_policy(&mut self, policy: &SelectionPolicy) {
        self.policy = policy.clone();
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PlanId {
        self.id
    }

    #[inline]
    pub fn settlement(&self) -> &Settlement {
        &self.settlement
    }

    #[inline]
    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    #[inline]
    pub fn catalog(&self) -> &[FacilityType] {
        &self.catalog
    }

    #[inline]
    pub fn status(&self) -> PlanStatus {
        self.status
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.settlement.capacity()
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[inline]
    pub fn under_construction(&self) -> &[Facility] {
        &self.under_construction
    }

    #[inline]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }
}

impl fmt::Display for Plan {
    /// Line-oriented status block: header fields, then one name/status pair
    /// per facility, under-construction first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PlanID: {}", self.id)?;
        writeln!(f, "SettlementName: {}", self.settlement.name())?;
        writeln!(f, "PlanStatus: {}", self.status)?;
        writeln!(f, "SelectionPolicy: {}", self.policy)?;
        writeln!(f, "LifeQualityScore: {}", self.scores.life_quality)?;
        writeln!(f, "EconomyScore: {}", self.scores.economy)?;
        writeln!(f, "EnvironmentScore: {}", self.scores.environment)?;
        for facility in self.under_construction.iter().chain(&self.facilities) {
            writeln!(f, "{facility}")?;
        }
        Ok(())
    }
}
