use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{policy} cannot select a facility: {reason}")]
    EmptySelection {
        policy: &'static str,
        reason: &'static str,
    },

    #[error("{policy} cannot select a facility: running score totals would overflow")]
    ScoreOverflow { policy: &'static str },

    #[error("invalid selection policy {0:?}: expected one of nve, nai, bal, eco, env, sus")]
    UnknownCode(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
