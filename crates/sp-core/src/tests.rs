//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::PlanId;

    #[test]
    fn next_is_monotonic() {
        let id = PlanId(0);
        assert_eq!(id.next(), PlanId(1));
        assert!(id < id.next());
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(PlanId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod scores {
    use crate::Scores;

    #[test]
    fn checked_add_is_per_dimension() {
        let a = Scores::new(1, 2, 3);
        let b = Scores::new(10, 20, 30);
        assert_eq!(a.checked_add(b), Some(Scores::new(11, 22, 33)));
        assert_eq!(Scores::ZERO.checked_add(a), Some(a));
    }

    #[test]
    fn checked_add_reports_overflow() {
        let near_max = Scores::new(0, i64::MAX - 1, 0);
        assert_eq!(near_max.checked_add(Scores::new(0, 1, 0)), Some(Scores::new(0, i64::MAX, 0)));
        assert_eq!(near_max.checked_add(Scores::new(0, 2, 0)), None);
        assert_eq!(Scores::new(i64::MIN, 0, 0).checked_add(Scores::new(-1, 0, 0)), None);
    }

    #[test]
    fn totals_of_i32_extremes_do_not_overflow() {
        let big = Scores::new(i32::MAX.into(), i32::MIN.into(), 0);
        let mut total = Scores::ZERO;
        for _ in 0..4 {
            total = total.checked_add(big).unwrap();
        }
        assert_eq!(total, Scores::new(4 * i64::from(i32::MAX), 4 * i64::from(i32::MIN), 0));
    }

    #[test]
    fn range_is_max_minus_min() {
        assert_eq!(Scores::new(5, 1, 1).range(), 4);
        assert_eq!(Scores::new(3, 3, 3).range(), 0);
        assert_eq!(Scores::new(-2, 0, 4).range(), 6);
    }

    #[test]
    fn range_spans_full_i64() {
        assert_eq!(Scores::new(i64::MAX, i64::MIN, 0).range(), u64::MAX);
        assert_eq!(Scores::new(i32::MAX.into(), i32::MIN.into(), 0).range(), u64::from(u32::MAX));
    }
}

#[cfg(test)]
mod settlement {
    use crate::{CoreError, Settlement, SettlementType};

    #[test]
    fn capacity_by_type() {
        assert_eq!(SettlementType::Village.capacity(), 1);
        assert_eq!(SettlementType::City.capacity(), 2);
        assert_eq!(SettlementType::Metropolis.capacity(), 3);
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..3 {
            let kind = SettlementType::from_code(code).unwrap();
            assert_eq!(kind.code() as i64, code);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(SettlementType::from_code(3), Err(CoreError::InvalidSettlementType(3)));
        assert!(SettlementType::from_code(-1).is_err());
    }

    #[test]
    fn settlement_accessors() {
        let s = Settlement::new("KfarSPL", SettlementType::City);
        assert_eq!(s.name(), "KfarSPL");
        assert_eq!(s.kind(), SettlementType::City);
        assert_eq!(s.capacity(), 2);
    }
}

#[cfg(test)]
mod facility {
    use crate::{CoreError, Facility, FacilityCategory, FacilityStatus, FacilityType, Scores};

    fn park(cost: i64) -> FacilityType {
        FacilityType::new("park", FacilityCategory::Environment, cost, Scores::new(1, 0, 4)).unwrap()
    }

    #[test]
    fn zero_or_negative_cost_rejected() {
        let err = FacilityType::new("x", FacilityCategory::Economy, 0, Scores::ZERO).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCost { cost: 0, .. }));
        assert!(FacilityType::new("x", FacilityCategory::Economy, -3, Scores::ZERO).is_err());
    }

    #[test]
    fn oversized_cost_has_its_own_error() {
        let max = i64::from(u32::MAX);
        assert_eq!(FacilityType::new("x", FacilityCategory::Economy, max, Scores::ZERO).unwrap().cost(), u32::MAX);

        let err = FacilityType::new("x", FacilityCategory::Economy, max + 1, Scores::ZERO).unwrap_err();
        assert_eq!(err, CoreError::CostTooLarge { name: "x".into(), cost: max + 1 });
        assert!(err.to_string().contains("at most 4294967295"));
        assert!(!err.to_string().contains("positive"));
    }

    #[test]
    fn category_codes() {
        assert_eq!(FacilityCategory::from_code(1).unwrap(), FacilityCategory::Economy);
        assert_eq!(FacilityCategory::from_code(9), Err(CoreError::InvalidCategory(9)));
    }

    #[test]
    fn new_facility_starts_under_construction() {
        let f = Facility::new(park(3), "Metropolis");
        assert_eq!(f.status(), FacilityStatus::UnderConstruction);
        assert_eq!(f.time_left(), 3);
        assert_eq!(f.settlement_name(), "Metropolis");
        assert_eq!(f.name(), "park");
    }

    #[test]
    fn becomes_operational_after_cost_steps() {
        let mut f = Facility::new(park(3), "S");
        assert_eq!(f.step(), FacilityStatus::UnderConstruction);
        assert_eq!(f.step(), FacilityStatus::UnderConstruction);
        assert_eq!(f.step(), FacilityStatus::Operational);
        assert_eq!(f.time_left(), 0);
    }

    #[test]
    fn step_after_completion_is_noop() {
        let mut f = Facility::new(park(1), "S");
        assert_eq!(f.step(), FacilityStatus::Operational);
        let before = f.clone();
        assert_eq!(f.step(), FacilityStatus::Operational);
        assert_eq!(f, before);
    }

    #[test]
    fn display_lists_name_and_status() {
        let f = Facility::new(park(2), "S");
        assert_eq!(f.to_string(), "FacilityName: park\nFacilityStatus: UNDER_CONSTRUCTION");
    }
}
