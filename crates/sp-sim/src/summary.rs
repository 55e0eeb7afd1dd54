//! Final per-plan results reported when the simulation closes.

use std::fmt;

use sp_core::{PlanId, Scores};
use sp_plan::Plan;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlanSummary {
    pub id:         PlanId,
    pub settlement: String,
    pub scores:     Scores,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id:         plan.id(),
            settlement: plan.settlement().name().to_owned(),
            scores:     plan.scores(),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PlanID: {}", self.id)?;
        writeln!(f, "SettlementName: {}", self.settlement)?;
        writeln!(f, "LifeQuality_Score: {}", self.scores.life_quality)?;
        writeln!(f, "Economy_Score: {}", self.scores.economy)?;
        write!(f, "Environment_Score: {}", self.scores.environment)
    }
}
