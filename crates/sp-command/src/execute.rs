//! Running commands against a simulation.

use sp_sim::{ActionRecord, NoopObserver, SimObserver, Simulation};
use tracing::{debug, warn};

use crate::{Command, CommandResult};

/// Run `command` against `sim` and append its record to the action log.
///
/// Returns the text the command produces for the user, if any (`planStatus`,
/// `log`, `close`).  On failure the error is returned after an `ERROR` record
/// has been logged; the simulation itself is unchanged.
pub fn execute(sim: &mut Simulation, command: &Command) -> CommandResult<Option<String>> {
    execute_with(sim, command, &mut NoopObserver)
}

/// Like [`execute`] but reports `step` and `close` progress to `observer`.
pub fn execute_with<O: SimObserver>(
    sim:      &mut Simulation,
    command:  &Command,
    observer: &mut O,
) -> CommandResult<Option<String>> {
    let result = run(sim, command, observer);
    let text = command.to_string();
    match &result {
        Ok(_) => {
            debug!(command = %text, "command completed");
            sim.record_action(ActionRecord::completed(text));
        }
        Err(e) => {
            warn!(command = %text, error = %e, "command failed");
            sim.record_action(ActionRecord::failed(text, e.to_string()));
        }
    }
    result
}

fn run<O: SimObserver>(
    sim:      &mut Simulation,
    command:  &Command,
    observer: &mut O,
) -> CommandResult<Option<String>> {
    match command {
        Command::Step(n) => {
            sim.step_n_with(*n, observer)?;
            Ok(None)
        }

        Command::Register(directive) => {
            directive.clone().apply(sim)?;
            Ok(None)
        }

        Command::PlanStatus(id) => Ok(Some(sim.plan(*id)?.to_string())),

        Command::ChangePolicy { plan, policy } => {
            sim.change_plan_policy(*plan, &policy.build())?;
            Ok(None)
        }

        Command::PrintLog => {
            let lines: Vec<String> = sim.actions_log().iter().map(ToString::to_string).collect();
            Ok(Some(lines.join("\n")))
        }

        Command::Close => {
            let summaries = sim.close_with(observer)?;
            let mut blocks: Vec<String> = summaries.iter().map(ToString::to_string).collect();
            blocks.push("Simulation closed.".to_owned());
            Ok(Some(blocks.join("\n----------------------------------------\n")))
        }

        Command::Backup => {
            sim.backup();
            Ok(None)
        }

        Command::Restore => {
            sim.restore()?;
            Ok(None)
        }
    }
}
