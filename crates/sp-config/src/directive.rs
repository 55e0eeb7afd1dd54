//! A single configuration directive.

use std::fmt;

use sp_core::{FacilityCategory, FacilityType, Scores, Settlement, SettlementType};
use sp_policy::PolicyKind;
use sp_sim::{SimResult, Simulation};

use crate::DirectiveError;

/// One `settlement`, `facility` or `plan` line, already validated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Directive {
    Settlement(Settlement),
    Facility(FacilityType),
    Plan {
        settlement: String,
        policy:     PolicyKind,
    },
}

impl Directive {
    /// Parse one line.  Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, DirectiveError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            None => Ok(None),
            Some(first) if first.starts_with('#') => Ok(None),
            Some(_) => Self::from_tokens(&tokens).map(Some),
        }
    }

    /// Parse a non-empty token list whose first element is the keyword.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, DirectiveError> {
        let (keyword, args) = tokens
            .split_first()
            .ok_or_else(|| DirectiveError::UnknownKeyword(String::new()))?;

        match *keyword {
            "settlement" => {
                expect_args("settlement", args, 2)?;
                let kind = SettlementType::from_code(int(args[1], "settlement type")?)?;
                Ok(Directive::Settlement(Settlement::new(args[0], kind)))
            }
            "facility" => {
                expect_args("facility", args, 6)?;
                let category = FacilityCategory::from_code(int(args[1], "facility category")?)?;
                let cost = int(args[2], "cost")?;
                let scores = Scores::new(
                    score(args[3], "life quality score")?,
                    score(args[4], "economy score")?,
                    score(args[5], "environment score")?,
                );
                Ok(Directive::Facility(FacilityType::new(args[0], category, cost, scores)?))
            }
            "plan" => {
                expect_args("plan", args, 2)?;
                Ok(Directive::Plan {
                    settlement: args[0].to_owned(),
                    policy:     args[1].parse()?,
                })
            }
            other => Err(DirectiveError::UnknownKeyword(other.to_owned())),
        }
    }

    /// Register this directive with `sim` via the matching `add_*` call.
    pub fn apply(self, sim: &mut Simulation) -> SimResult<()> {
        match self {
            Directive::Settlement(settlement) => sim.add_settlement(settlement),
            Directive::Facility(facility)     => sim.add_facility(facility),
            Directive::Plan { settlement, policy } => {
                sim.add_plan(&settlement, policy.build()).map(|_| ())
            }
        }
    }
}

impl fmt::Display for Directive {
    /// Canonical single-line form; parses back to an equal directive.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Settlement(s) => write!(f, "settlement {} {}", s.name(), s.kind().code()),
            Directive::Facility(t) => {
                let s = t.scores();
                write!(
                    f,
                    "facility {} {} {} {} {} {}",
                    t.name(),
                    t.category().code(),
                    t.cost(),
                    s.life_quality,
                    s.economy,
                    s.environment,
                )
            }
            Directive::Plan { settlement, policy } => write!(f, "plan {settlement} {policy}"),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expect_args(keyword: &'static str, args: &[&str], expected: usize) -> Result<(), DirectiveError> {
    if args.len() != expected {
        return Err(DirectiveError::Arity { keyword, expected, got: args.len() });
    }
    Ok(())
}

fn int(value: &str, field: &'static str) -> Result<i64, DirectiveError> {
    value
        .parse()
        .map_err(|_| DirectiveError::BadNumber { field, value: value.to_owned() })
}

/// Facility scores are limited to the `i32` range.
fn score(value: &str, field: &'static str) -> Result<i64, DirectiveError> {
    value
        .parse::<i32>()
        .map(i64::from)
        .map_err(|_| DirectiveError::BadNumber { field, value: value.to_owned() })
}
