//! Unit tests for sp-policy.

use sp_core::{FacilityCategory, FacilityType, Scores};

use crate::{PolicyError, PolicyKind, SelectionPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ft(name: &str, category: FacilityCategory, scores: (i64, i64, i64)) -> FacilityType {
    FacilityType::new(name, category, 1, Scores::new(scores.0, scores.1, scores.2)).unwrap()
}

fn names(policy: &mut SelectionPolicy, catalog: &[FacilityType], n: usize) -> Vec<String> {
    (0..n)
        .map(|_| policy.select_facility(catalog).unwrap().name().to_owned())
        .collect()
}

/// A, B, C of mixed categories.
fn abc() -> Vec<FacilityType> {
    vec![
        ft("A", FacilityCategory::LifeQuality, (1, 0, 0)),
        ft("B", FacilityCategory::Economy,     (0, 1, 0)),
        ft("C", FacilityCategory::Environment, (0, 0, 1)),
    ]
}

// ── Naive ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod naive {
    use super::*;

    #[test]
    fn round_robin_wraps() {
        let mut p = SelectionPolicy::naive();
        assert_eq!(names(&mut p, &abc(), 4), ["A", "B", "C", "A"]);
    }

    #[test]
    fn clone_captures_cursor_then_diverges() {
        let catalog = abc();
        let mut p = SelectionPolicy::naive();
        p.select_facility(&catalog).unwrap(); // A

        let mut copy = p.clone();
        assert_eq!(names(&mut copy, &catalog, 2), ["B", "C"]);
        // Original is unaffected by the clone's progress.
        assert_eq!(names(&mut p, &catalog, 1), ["B"]);
    }

    #[test]
    fn empty_catalog_fails_without_moving_cursor() {
        let mut p = SelectionPolicy::naive();
        let err = p.select_facility(&[]).unwrap_err();
        assert!(matches!(err, PolicyError::EmptySelection { policy: "NaiveSelection", .. }));
        assert_eq!(p, SelectionPolicy::naive());
    }
}

// ── Balanced ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod balanced {
    use super::*;

    #[test]
    fn tie_goes_to_first_listed() {
        let catalog = vec![
            ft("L", FacilityCategory::LifeQuality, (5, 1, 1)),
            ft("E", FacilityCategory::Economy,     (1, 5, 1)),
        ];
        let mut p = SelectionPolicy::balanced(Scores::ZERO);
        assert_eq!(p.select_facility(&catalog).unwrap().name(), "L");
        assert_eq!(p, SelectionPolicy::Balanced { totals: Scores::new(5, 1, 1) });
    }

    #[test]
    fn prefers_candidate_that_evens_totals() {
        let catalog = vec![
            ft("L", FacilityCategory::LifeQuality, (5, 1, 1)),
            ft("E", FacilityCategory::Economy,     (1, 5, 1)),
            ft("V", FacilityCategory::Environment, (1, 1, 5)),
        ];
        let mut p = SelectionPolicy::balanced(Scores::ZERO);
        // L: (5,1,1) → range 4.  Then E gives (6,6,2) range 4 and V gives
        // (6,2,6) range 4, L gives (10,2,2) range 8 → E (first of the tie).
        // Then V gives (7,7,7) range 0.
        assert_eq!(names(&mut p, &catalog, 3), ["L", "E", "V"]);
        assert_eq!(p, SelectionPolicy::Balanced { totals: Scores::new(7, 7, 7) });
    }

    #[test]
    fn seed_influences_first_pick() {
        let catalog = vec![
            ft("L", FacilityCategory::LifeQuality, (5, 1, 1)),
            ft("E", FacilityCategory::Economy,     (1, 5, 1)),
        ];
        let mut p = SelectionPolicy::balanced(Scores::new(4, 0, 0));
        assert_eq!(p.select_facility(&catalog).unwrap().name(), "E");
    }

    #[test]
    fn extreme_scores_are_ranked_without_overflow() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);
        let catalog = vec![
            ft("wild", FacilityCategory::Economy, (max, min, 0)),
            ft("calm", FacilityCategory::LifeQuality, (1, 1, 1)),
        ];
        let mut p = SelectionPolicy::balanced(Scores::ZERO);
        assert_eq!(p.select_facility(&catalog).unwrap().name(), "calm");

        let wild_only = &catalog[..1];
        let mut q = SelectionPolicy::balanced(Scores::ZERO);
        assert_eq!(names(&mut q, wild_only, 3), ["wild", "wild", "wild"]);
        assert_eq!(q, SelectionPolicy::Balanced { totals: Scores::new(3 * max, 3 * min, 0) });
    }

    #[test]
    fn overflowing_totals_fail_and_leave_state() {
        let catalog = vec![ft("L", FacilityCategory::LifeQuality, (5, 1, 1))];
        let seed = Scores::new(i64::MAX - 2, 0, 0);
        let mut p = SelectionPolicy::balanced(seed);
        let err = p.select_facility(&catalog).unwrap_err();
        assert_eq!(err, PolicyError::ScoreOverflow { policy: "BalancedSelection" });
        assert_eq!(p, SelectionPolicy::balanced(seed));
    }
}

// ── Economy / Sustainability ──────────────────────────────────────────────────

#[cfg(test)]
mod category_scan {
    use super::*;

    fn eco_at_0_and_2() -> Vec<FacilityType> {
        vec![
            ft("mall",   FacilityCategory::Economy,     (0, 3, 0)),
            ft("park",   FacilityCategory::Environment, (0, 0, 3)),
            ft("market", FacilityCategory::Economy,     (0, 2, 0)),
            ft("school", FacilityCategory::LifeQuality, (3, 0, 0)),
        ]
    }

    #[test]
    fn economy_cycles_matching_indices() {
        let mut p = SelectionPolicy::economy();
        assert_eq!(names(&mut p, &eco_at_0_and_2(), 3), ["mall", "market", "mall"]);
        assert_eq!(p, SelectionPolicy::Economy { last_selected: Some(0) });
    }

    #[test]
    fn sustainability_filters_environment() {
        let mut p = SelectionPolicy::sustainability();
        assert_eq!(names(&mut p, &eco_at_0_and_2(), 2), ["park", "park"]);
    }

    #[test]
    fn no_match_fails_and_keeps_cursor() {
        let catalog = vec![ft("school", FacilityCategory::LifeQuality, (3, 0, 0))];
        let mut p = SelectionPolicy::Economy { last_selected: Some(0) };
        let err = p.select_facility(&catalog).unwrap_err();
        assert_eq!(
            err,
            PolicyError::EmptySelection {
                policy: "EconomySelection",
                reason: "no facility type of category ECONOMY",
            }
        );
        assert_eq!(p, SelectionPolicy::Economy { last_selected: Some(0) });
    }
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind {
    use super::*;

    #[test]
    fn parses_all_codes() {
        assert_eq!("nve".parse::<PolicyKind>().unwrap(), PolicyKind::Naive);
        assert_eq!("nai".parse::<PolicyKind>().unwrap(), PolicyKind::Naive);
        assert_eq!("bal".parse::<PolicyKind>().unwrap(), PolicyKind::Balanced);
        assert_eq!("eco".parse::<PolicyKind>().unwrap(), PolicyKind::Economy);
        assert_eq!("env".parse::<PolicyKind>().unwrap(), PolicyKind::Sustainability);
        assert_eq!("sus".parse::<PolicyKind>().unwrap(), PolicyKind::Sustainability);
    }

    #[test]
    fn unknown_code_names_the_input() {
        let err = "greedy".parse::<PolicyKind>().unwrap_err();
        assert_eq!(err, PolicyError::UnknownCode("greedy".into()));
        assert!(err.to_string().contains("\"greedy\""));
    }

    #[test]
    fn build_matches_kind_and_label() {
        for kind in [
            PolicyKind::Naive,
            PolicyKind::Balanced,
            PolicyKind::Economy,
            PolicyKind::Sustainability,
        ] {
            let policy = kind.build();
            assert_eq!(policy.kind(), kind);
            assert_eq!(policy.to_string(), kind.label());
            assert_eq!(kind.code().parse::<PolicyKind>().unwrap(), kind);
        }
    }
}
