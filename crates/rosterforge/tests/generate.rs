//! End-to-end tests through the facade entry points.

use rosterforge::prelude::*;
use rosterforge::{EnvironmentMode, RosterError};
use rosterforge_test::properties::{
    forbidden_transitions, longest_run, pinned_cells_preserved, shortage_by_day,
};
use rosterforge_test::scenario::{single_night_scenario, uniform_scenario, ward_scenario};

fn seeded(seed: u64) -> RosterConfig {
    RosterConfig::new()
        .with_random_seed(seed)
        .with_restart_count(6)
        .with_environment_mode(EnvironmentMode::FullAssert)
}

#[test]
fn test_ward_scenario_properties() {
    let problem = ward_scenario();
    for seed in [1, 2024, 90210] {
        let result = generate_with_config(&problem, seeded(seed)).unwrap();
        let roster = &result.roster;

        assert!(roster.is_complete());
        assert_eq!(result.score.shortage(), 0, "seed {seed} leaves shortage");
        assert!(shortage_by_day(&problem, roster).iter().all(|&s| s == 0));
        assert!(forbidden_transitions(roster, &problem.rules.forbidden).is_empty());
        for staff in 0..roster.staff_count() {
            assert!(longest_run(roster, staff) <= 5, "staff {staff} works 6 days in a row");
            let rest = roster.rest_count(staff);
            assert!((8..=12).contains(&rest), "staff {staff} rests {rest} days");
        }

        let report = result.report(&problem);
        assert!(report.is_clean());
        assert!(report.overlong_runs.is_empty());
        assert!(report.rest_deficits.is_empty());
        assert_eq!(report.rest_counts.len(), 10);
    }
}

#[test]
fn test_default_entry_point() {
    let problem = ward_scenario();
    let result = generate(&problem).unwrap();

    assert!(result.roster.is_complete());
    assert!(result.statistics.attempts_completed >= 1);
    assert!(result.statistics.best_attempt.is_some());
}

#[test]
fn test_ample_pool_is_fully_staffed() {
    let problem = uniform_scenario(12, 14, ShiftDemand::new(2, 2, 2, 0), 2, 5);
    let result = generate_with_config(&problem, seeded(5)).unwrap();

    assert!(result.score.is_fully_staffed());
    assert!(shortage_by_day(&problem, &result.roster).iter().all(|&s| s == 0));
    for day in 0..14 {
        for shift in [ShiftKind::Day, ShiftKind::Evening, ShiftKind::Night] {
            assert!(result.roster.headcount(day, shift) >= 2, "day {day} {shift}");
        }
    }
}

#[test]
fn test_single_night_staff_leaves_shortage_every_day() {
    let problem = single_night_scenario(10);
    let result = generate_with_config(&problem, seeded(9)).unwrap();

    assert!(result.roster.is_complete());
    assert!(shortage_by_day(&problem, &result.roster).iter().all(|&s| s > 0));
    assert!(!result.report(&problem).is_clean());
}

#[test]
fn test_config_overrides_apply_to_copy() {
    let problem = uniform_scenario(12, 14, ShiftDemand::new(2, 2, 2, 0), 2, 5);
    let mut config = seeded(13);
    config.parameters = Some(problem.params.clone().with_min_rest_days(6));

    let result = generate_with_config(&problem, config).unwrap();

    for staff in 0..result.roster.staff_count() {
        assert!(result.roster.rest_count(staff) >= 6, "staff {staff}");
    }
    assert_eq!(problem.params.min_rest_days, 2);
}

#[test]
fn test_pinned_cells_kept() {
    let mut problem = ward_scenario();
    problem.roster.pin_rest(StaffId::new(4), 10).unwrap();
    problem
        .roster
        .assign(StaffId::new(1), 0, Cell::Work(ShiftKind::Night))
        .unwrap();

    let result = generate_with_config(&problem, seeded(77)).unwrap();
    assert!(pinned_cells_preserved(&problem.roster, &result.roster));
}

#[test]
fn test_invalid_config_rejected() {
    let problem = ward_scenario();
    let config = RosterConfig::new().with_restart_count(0);

    let err = generate_with_config(&problem, config).unwrap_err();
    assert!(matches!(err, RosterError::Config(_)));
}

#[test]
fn test_malformed_problem_rejected() {
    let mut problem = ward_scenario();
    problem.calendar = Calendar::all_weekdays(27);

    assert!(generate_with_config(&problem, seeded(1)).is_err());
}
