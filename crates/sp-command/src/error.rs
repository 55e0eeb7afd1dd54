use sp_config::DirectiveError;
use sp_policy::PolicyError;
use sp_sim::SimError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} arguments, got {got}")]
    Arity {
        command:  &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("{field} must be a non-negative integer, got {value:?}")]
    BadNumber {
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Directive(#[from] DirectiveError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type CommandResult<T> = Result<T, CommandError>;
