use sp_core::PlanId;
use sp_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("plan {plan}: {source}")]
    Selection {
        plan:   PlanId,
        #[source]
        source: PolicyError,
    },

    #[error("plan {plan}: running scores would overflow")]
    ScoreOverflow { plan: PlanId },
}

pub type PlanResult<T> = Result<T, PlanError>;
