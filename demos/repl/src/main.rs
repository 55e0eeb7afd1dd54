//! settle-repl — interactive front end for the settlement simulator.
//!
//! Loads a configuration file, opens the simulation and reads commands from
//! stdin until `close` (or end of input).  Set `RUST_LOG=debug` to see the
//! per-step trace on stderr.
//!
//! ```text
//! settle-repl config.txt --scores-dir ./out
//! Enter an action: step 3
//! Enter an action: planStatus 0
//! Enter an action: close
//! ```

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sp_command::{execute, execute_with, parse_command, Command};
use sp_config::{apply_directives, load_config_path};
use sp_output::{CsvWriter, ScoreObserver};
use sp_sim::Simulation;

#[derive(Parser, Debug)]
#[command(version, about = "Settlement-development simulator", long_about = None)]
struct Cli {
    /// Configuration file with settlement, facility and plan lines
    config: PathBuf,

    /// Write per-step plan scores and facility completions as CSV here
    #[arg(long)]
    scores_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Load configuration ────────────────────────────────────────────────────

    let parsed = load_config_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let mut sim = Simulation::new();
    let malformed = parsed.rejected.len();
    let rejected = apply_directives(&mut sim, parsed.entries);
    info!(
        settlements = sim.settlements().len(),
        facilities = sim.catalog().len(),
        plans = sim.plans().len(),
        malformed,
        rejected = rejected.len(),
        "configuration loaded"
    );

    let mut scores = match &cli.scores_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(ScoreObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };

    // ── Command loop ──────────────────────────────────────────────────────────

    sim.open()?;
    println!("The simulation has started");

    let interactive = io::stdin().is_terminal();
    let mut lines = io::stdin().lock().lines();
    while sim.is_running() {
        if interactive {
            print!("Enter an action: ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("Error: {e}");
                continue;
            }
        };

        let result = match scores.as_mut() {
            Some(obs) => execute_with(&mut sim, &command, obs),
            None => execute(&mut sim, &command),
        };
        match result {
            Ok(Some(text)) if !text.is_empty() => println!("{}", text.trim_end()),
            Ok(_) => {}
            Err(e) => println!("Error: {e}"),
        }
        report_output_error(&mut scores);
    }

    // End of input without `close`.
    if sim.is_running() {
        let result = match scores.as_mut() {
            Some(obs) => execute_with(&mut sim, &Command::Close, obs),
            None => execute(&mut sim, &Command::Close),
        };
        if let Some(text) = result? {
            println!("{text}");
        }
        report_output_error(&mut scores);
    }
    Ok(())
}

fn report_output_error(scores: &mut Option<ScoreObserver<CsvWriter>>) {
    if let Some(e) = scores.as_mut().and_then(ScoreObserver::take_error) {
        warn!(error = %e, "score output failed");
    }
}
