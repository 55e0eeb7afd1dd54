use sp_core::CoreError;
use sp_policy::PolicyError;
use thiserror::Error;

/// Why a single directive line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("unknown directive {0:?}")]
    UnknownKeyword(String),

    #[error("{keyword} expects {expected} arguments, got {got}")]
    Arity {
        keyword:  &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("{field} must be an integer, got {value:?}")]
    BadNumber {
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config line {line}: {source}")]
    Line {
        line:   usize,
        #[source]
        source: DirectiveError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
