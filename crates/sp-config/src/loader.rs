//! Configuration file loader.
//!
//! # Example file
//!
//! ```text
//! # Settlements
//! settlement KfarSPL 0
//! settlement Metro 2
//!
//! # Facilities: name category cost life eco env
//! facility school 0 2 3 1 0
//! facility factory 1 3 0 4 -1
//!
//! plan KfarSPL nve
//! plan Metro bal
//! ```

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sp_sim::{SimError, Simulation};
use tracing::{debug, warn};

use crate::{ConfigError, ConfigResult, Directive};

/// A parsed directive together with its 1-based line number.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConfigEntry {
    pub line:      usize,
    pub directive: Directive,
}

/// Result of parsing a whole file.
#[derive(Debug, Default)]
pub struct ParsedConfig {
    /// Well-formed directives, in file order.
    pub entries:  Vec<ConfigEntry>,
    /// One [`ConfigError::Line`] per malformed line, in file order.
    pub rejected: Vec<ConfigError>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse the configuration file at `path`.
pub fn load_config_path(path: &Path) -> ConfigResult<ParsedConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(file)
}

/// Like [`load_config_path`] but accepts any `Read` source.
///
/// Malformed lines are logged, collected in [`ParsedConfig::rejected`] and
/// skipped; only I/O errors fail the load.
pub fn load_config_reader<R: Read>(reader: R) -> ConfigResult<ParsedConfig> {
    let mut parsed = ParsedConfig::default();
    for (i, text) in BufReader::new(reader).lines().enumerate() {
        let line = i + 1;
        let text = text?;
        match Directive::parse(&text) {
            Ok(Some(directive)) => parsed.entries.push(ConfigEntry { line, directive }),
            Ok(None) => {}
            Err(source) => {
                warn!(line, text = %text.trim(), error = %source, "malformed configuration line skipped");
                parsed.rejected.push(ConfigError::Line { line, source });
            }
        }
    }
    debug!(
        directives = parsed.entries.len(),
        malformed = parsed.rejected.len(),
        "configuration parsed"
    );
    Ok(parsed)
}

/// Apply `entries` to `sim` in file order.
///
/// Directives the simulation rejects (duplicate names, plans for unknown
/// settlements) are skipped with a warning; loading continues with the next
/// line.  Returns the rejected lines and why.
pub fn apply_directives(
    sim:     &mut Simulation,
    entries: impl IntoIterator<Item = ConfigEntry>,
) -> Vec<(usize, SimError)> {
    let mut rejected = Vec::new();
    for ConfigEntry { line, directive } in entries {
        let text = directive.to_string();
        if let Err(e) = directive.apply(sim) {
            warn!(line, directive = %text, error = %e, "configuration directive rejected");
            rejected.push((line, e));
        }
    }
    rejected
}
