//! Records of executed commands, kept in the simulation's action log.

use std::fmt;

/// Outcome of one executed command.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ActionStatus {
    Completed,
    Error,
}

impl ActionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionStatus::Completed => "COMPLETED",
            ActionStatus::Error     => "ERROR",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the action log.
///
/// `command` is the canonical command text (`"step 3"`, `"plan KfarSPL eco"`),
/// so the log doubles as a replay script.  Renders as `"<command> <STATUS>"`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActionRecord {
    command: String,
    status:  ActionStatus,
    error:   Option<String>,
}

impl ActionRecord {
    pub fn completed(command: impl Into<String>) -> Self {
        Self { command: command.into(), status: ActionStatus::Completed, error: None }
    }

    pub fn failed(command: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            status:  ActionStatus::Error,
            error:   Some(error.into()),
        }
    }

    #[inline]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[inline]
    pub fn status(&self) -> ActionStatus {
        self.status
    }

    /// Error message, present iff `status` is `Error`.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.command, self.status)
    }
}
