//! Plain data row types written by output backends.

use sp_core::{Facility, FacilityCategory, PlanId};
use sp_plan::Plan;

/// One plan's state at the end of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub step:               u64,
    pub plan_id:            u32,
    pub settlement:         String,
    pub life_quality:       i64,
    pub economy:            i64,
    pub environment:        i64,
    pub under_construction: u32,
    pub operational:        u32,
}

impl ScoreRow {
    pub fn from_plan(step: u64, plan: &Plan) -> Self {
        let scores = plan.scores();
        Self {
            step,
            plan_id:            plan.id().get(),
            settlement:         plan.settlement().name().to_owned(),
            life_quality:       scores.life_quality,
            economy:            scores.economy,
            environment:        scores.environment,
            under_construction: plan.under_construction().len() as u32,
            operational:        plan.facilities().len() as u32,
        }
    }
}

/// A facility that became operational during `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    pub step:       u64,
    pub plan_id:    u32,
    pub settlement: String,
    pub facility:   String,
    pub category:   FacilityCategory,
}

impl CompletionRow {
    pub fn new(step: u64, plan: PlanId, facility: &Facility) -> Self {
        Self {
            step,
            plan_id:    plan.get(),
            settlement: facility.settlement_name().to_owned(),
            facility:   facility.name().to_owned(),
            category:   facility.facility_type().category(),
        }
    }
}
