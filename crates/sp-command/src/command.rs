//! Typed commands and their textual syntax.

use std::fmt;
use std::str::FromStr;

use sp_config::Directive;
use sp_core::PlanId;
use sp_policy::PolicyKind;

use crate::{CommandError, CommandResult};

/// One user command.
///
/// | Syntax                                        | Variant          |
/// |-----------------------------------------------|------------------|
/// | `step <n>`                                    | `Step`           |
/// | `settlement <name> <type>`                    | `Register`       |
/// | `facility <name> <cat> <cost> <l> <e> <v>`    | `Register`       |
/// | `plan <settlement> <policy>`                  | `Register`       |
/// | `planStatus <id>`                             | `PlanStatus`     |
/// | `changePolicy <id> <policy>`                  | `ChangePolicy`   |
/// | `log`                                         | `PrintLog`       |
/// | `close`                                       | `Close`          |
/// | `backup`                                      | `Backup`         |
/// | `restore`                                     | `Restore`        |
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Step(u64),
    /// Add a settlement, facility type or plan, exactly as a config line would.
    Register(Directive),
    PlanStatus(PlanId),
    ChangePolicy { plan: PlanId, policy: PolicyKind },
    PrintLog,
    Close,
    Backup,
    Restore,
}

/// Parse one command line.  Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> CommandResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword {
        "step" => {
            expect_args("step", args, 1)?;
            Command::Step(number(args[0], "step count")?)
        }
        "planStatus" => {
            expect_args("planStatus", args, 1)?;
            Command::PlanStatus(PlanId(number(args[0], "plan id")?))
        }
        "changePolicy" => {
            expect_args("changePolicy", args, 2)?;
            Command::ChangePolicy {
                plan:   PlanId(number(args[0], "plan id")?),
                policy: args[1].parse()?,
            }
        }
        "log"     => nullary("log", args, Command::PrintLog)?,
        "close"   => nullary("close", args, Command::Close)?,
        "backup"  => nullary("backup", args, Command::Backup)?,
        "restore" => nullary("restore", args, Command::Restore)?,
        "settlement" | "facility" | "plan" => Command::Register(Directive::from_tokens(&tokens)?),
        other => return Err(CommandError::UnknownCommand(other.to_owned())),
    };
    Ok(Some(command))
}

impl fmt::Display for Command {
    /// Canonical text, as stored in the action log.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Step(n)                       => write!(f, "step {n}"),
            Command::Register(directive)           => write!(f, "{directive}"),
            Command::PlanStatus(id)                => write!(f, "planStatus {id}"),
            Command::ChangePolicy { plan, policy } => write!(f, "changePolicy {plan} {policy}"),
            Command::PrintLog                      => f.write_str("log"),
            Command::Close                         => f.write_str("close"),
            Command::Backup                        => f.write_str("backup"),
            Command::Restore                       => f.write_str("restore"),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> CommandResult<()> {
    if args.len() != expected {
        return Err(CommandError::Arity { command, expected, got: args.len() });
    }
    Ok(())
}

fn nullary(command: &'static str, args: &[&str], value: Command) -> CommandResult<Command> {
    expect_args(command, args, 0)?;
    Ok(value)
}

fn number<T: FromStr>(value: &str, field: &'static str) -> CommandResult<T> {
    value
        .parse()
        .map_err(|_| CommandError::BadNumber { field, value: value.to_owned() })
}
