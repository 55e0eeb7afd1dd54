//! `sp-config` — configuration directives and the file loader.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`directive`] | `Directive`, one parsed `settlement`/`facility`/`plan` line |
//! | [`loader`]    | `load_config_path`, `load_config_reader`, `apply_directives` |
//! | [`error`]     | `DirectiveError`, `ConfigError`, `ConfigResult<T>`        |
//!
//! # File format
//!
//! ```text
//! # comment
//! settlement <name> <type: 0 village | 1 city | 2 metropolis>
//! facility <name> <category: 0 life | 1 economy | 2 environment> <cost> <life> <eco> <env>
//! plan <settlement> <policy: nve | bal | eco | env>
//! ```
//!
//! Loading is two-phase and continues past bad lines in both: a malformed line
//! is logged and reported by the parser, and a directive the simulation
//! rejects (such as a duplicate name) is logged and reported by the applier.
//! Only I/O errors stop a load.

pub mod directive;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use directive::Directive;
pub use error::{ConfigError, ConfigResult, DirectiveError};
pub use loader::{apply_directives, load_config_path, load_config_reader, ConfigEntry, ParsedConfig};
