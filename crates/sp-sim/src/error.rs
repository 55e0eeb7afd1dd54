use sp_core::PlanId;
use sp_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("settlement {0:?} already exists")]
    SettlementExists(String),

    #[error("facility type {0:?} already exists")]
    FacilityTypeExists(String),

    #[error("settlement {0:?} not found")]
    SettlementNotFound(String),

    #[error("plan {0} not found")]
    PlanNotFound(PlanId),

    #[error("no backup exists")]
    NoBackup,

    #[error("simulation is not running")]
    NotRunning,

    #[error("simulation is already running")]
    AlreadyRunning,

    #[error(transparent)]
    Plan(#[from] PlanError),
}

pub type SimResult<T> = Result<T, SimError>;
