//! `sp-command` — the command layer between a user and a [`Simulation`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`command`] | `Command` enum, `parse_command`                            |
//! | [`execute`] | `execute`, `execute_with`: run a command, log its outcome |
//! | [`error`]   | `CommandError`, `CommandResult<T>`                         |
//!
//! # Logging rules
//!
//! Every command that *parses* is executed and leaves exactly one
//! [`ActionRecord`] in the simulation's action log, `COMPLETED` or `ERROR`.
//! Lines that do not parse never reach the simulation and are not logged.
//!
//! The record is appended after the command has run, which gives three
//! commands their observable behaviour:
//!
//! - `log` prints the log as it was before its own record.
//! - `backup` takes a snapshot that does not contain its own record.
//! - `restore` appends its record to the restored log.
//!
//! [`Simulation`]: sp_sim::Simulation
//! [`ActionRecord`]: sp_sim::ActionRecord

pub mod command;
pub mod error;
pub mod execute;


pub use command::{parse_command, Command};
pub use error::{CommandError, CommandResult};
pub use execute::{execute, execute_with};
