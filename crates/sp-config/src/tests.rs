//! Unit tests for sp-config.

use std::io::Cursor;

use sp_core::{CoreError, FacilityCategory, PlanId, Scores, SettlementType};
use sp_policy::{PolicyError, PolicyKind};
use sp_sim::{SimError, Simulation};

use crate::{apply_directives, load_config_reader, ConfigError, Directive, DirectiveError};

const CONFIG: &str = "\
# Settlements
settlement KfarSPL 0
settlement Metro   2

# Facilities: name category cost life eco env
facility school 0 2 3 1 0
facility factory 1 3 0 4 -1
facility forest 2 1 1 0 3

plan KfarSPL nve
plan Metro bal
plan Metro sus
";

// ── Directive parsing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod directive {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(Directive::parse("").unwrap(), None);
        assert_eq!(Directive::parse("   \t ").unwrap(), None);
        assert_eq!(Directive::parse("# settlement x 0").unwrap(), None);
        assert_eq!(Directive::parse("  #comment").unwrap(), None);
    }

    #[test]
    fn settlement_directive() {
        let d = Directive::parse("settlement Haifa 1").unwrap().unwrap();
        match d {
            Directive::Settlement(s) => {
                assert_eq!(s.name(), "Haifa");
                assert_eq!(s.kind(), SettlementType::City);
            }
            other => panic!("wrong directive: {other:?}"),
        }
    }

    #[test]
    fn facility_directive() {
        let d = Directive::parse("facility mall 1 4 0 5 -2").unwrap().unwrap();
        match d {
            Directive::Facility(t) => {
                assert_eq!(t.name(), "mall");
                assert_eq!(t.category(), FacilityCategory::Economy);
                assert_eq!(t.cost(), 4);
                assert_eq!(t.scores(), Scores::new(0, 5, -2));
            }
            other => panic!("wrong directive: {other:?}"),
        }
    }

    #[test]
    fn plan_directive_accepts_alias_codes() {
        let d = Directive::parse("plan Haifa nai").unwrap().unwrap();
        assert_eq!(
            d,
            Directive::Plan { settlement: "Haifa".into(), policy: PolicyKind::Naive },
        );
        assert_eq!(d.to_string(), "plan Haifa nve");
    }

    #[test]
    fn display_parses_back() {
        for line in ["settlement A 2", "facility f 2 7 1 -1 3", "plan A eco"] {
            let d = Directive::parse(line).unwrap().unwrap();
            assert_eq!(d.to_string(), line);
            assert_eq!(Directive::parse(&d.to_string()).unwrap(), Some(d));
        }
    }

    #[test]
    fn malformed_lines_report_the_problem() {
        assert_eq!(
            Directive::parse("settlement A").unwrap_err(),
            DirectiveError::Arity { keyword: "settlement", expected: 2, got: 1 },
        );
        assert_eq!(
            Directive::parse("facility f 0 two 1 1 1").unwrap_err(),
            DirectiveError::BadNumber { field: "cost", value: "two".into() },
        );
        assert_eq!(
            Directive::parse("settlement A 5").unwrap_err(),
            DirectiveError::Core(CoreError::InvalidSettlementType(5)),
        );
        assert!(matches!(
            Directive::parse("facility f 0 0 1 1 1").unwrap_err(),
            DirectiveError::Core(CoreError::InvalidCost { .. }),
        ));
        assert_eq!(
            Directive::parse("plan A greedy").unwrap_err(),
            DirectiveError::Policy(PolicyError::UnknownCode("greedy".into())),
        );
        assert_eq!(
            Directive::parse("road A B").unwrap_err(),
            DirectiveError::UnknownKeyword("road".into()),
        );
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_entries_with_line_numbers() {
        let parsed = load_config_reader(Cursor::new(CONFIG)).unwrap();
        assert!(parsed.rejected.is_empty());
        let entries = parsed.entries;
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[2].line, 6);
        assert_eq!(entries[7].line, 12);
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let text = "settlement A 0\nplan A\nplan A greedy\nplan A nve\n";
        let parsed = load_config_reader(Cursor::new(text)).unwrap();

        let lines: Vec<usize> = parsed.entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, [1, 4]);

        assert_eq!(parsed.rejected.len(), 2);
        match &parsed.rejected[0] {
            ConfigError::Line { line, source } => {
                assert_eq!(*line, 2);
                assert!(matches!(source, DirectiveError::Arity { keyword: "plan", .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parsed.rejected[0].to_string().starts_with("config line 2:"));
        assert!(matches!(
            &parsed.rejected[1],
            ConfigError::Line { line: 3, source: DirectiveError::Policy(PolicyError::UnknownCode(_)) }
        ));

        let mut sim = Simulation::new();
        assert!(apply_directives(&mut sim, parsed.entries).is_empty());
        assert_eq!(sim.plans().len(), 1);
    }

    #[test]
    fn oversized_score_is_a_malformed_line() {
        let text = "facility ok 0 1 2000000000 0 -2147483648\nfacility big 0 1 3000000000 0 0\n";
        let parsed = load_config_reader(Cursor::new(text)).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        match &parsed.entries[0].directive {
            Directive::Facility(t) => {
                assert_eq!(t.scores(), Scores::new(2_000_000_000, 0, i64::from(i32::MIN)));
            }
            other => panic!("unexpected directive: {other}"),
        }
        assert!(matches!(
            &parsed.rejected[..],
            [ConfigError::Line { line: 2, source: DirectiveError::BadNumber { field: "life quality score", .. } }]
        ));
    }

    #[test]
    fn apply_builds_the_simulation() {
        let mut sim = Simulation::new();
        let parsed = load_config_reader(Cursor::new(CONFIG)).unwrap();
        let rejected = apply_directives(&mut sim, parsed.entries);

        assert!(rejected.is_empty());
        assert_eq!(sim.settlements().len(), 2);
        assert_eq!(sim.catalog().len(), 3);
        assert_eq!(sim.plans().len(), 3);
        assert_eq!(sim.plan(PlanId(2)).unwrap().policy().kind(), PolicyKind::Sustainability);
        assert!(!sim.is_running());
    }

    #[test]
    fn apply_continues_past_rejected_directives() {
        let text = "\
settlement A 0
settlement A 1
plan Ghost eco
facility f 0 1 1 1 1
facility f 1 2 2 2 2
plan A nve
";
        let mut sim = Simulation::new();
        let rejected = apply_directives(&mut sim, load_config_reader(Cursor::new(text)).unwrap().entries);

        assert_eq!(
            rejected,
            vec![
                (2, SimError::SettlementExists("A".into())),
                (3, SimError::SettlementNotFound("Ghost".into())),
                (5, SimError::FacilityTypeExists("f".into())),
            ],
        );
        assert_eq!(sim.settlements().len(), 1);
        assert_eq!(sim.settlement("A").unwrap().kind(), SettlementType::Village);
        assert_eq!(sim.plans().len(), 1);
        assert_eq!(sim.plans()[0].id(), PlanId(0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_config_path(std::path::Path::new("/nonexistent/config.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
