//! Tests for the multi-restart solver.

use super::*;
use rosterforge_config::EnvironmentMode;
use rosterforge_core::{Calendar, Cell, Eligibility, ShiftDemand, ShiftKind, StaffId};
use rosterforge_test::properties::{
    forbidden_transitions, longest_run, pinned_cells_preserved, shortage_by_day,
};
use rosterforge_test::scenario::{single_night_scenario, uniform_scenario, ward_scenario};

fn config(seed: u64, restarts: usize) -> RosterConfig {
    RosterConfig::new()
        .with_random_seed(seed)
        .with_restart_count(restarts)
        .with_thread_count(ThreadCount::None)
        .with_environment_mode(EnvironmentMode::FullAssert)
}

#[test]
fn test_ward_roster_is_complete_and_legal() {
    let problem = ward_scenario();
    for seed in [7, 21, 2024] {
        let result = RosterSolver::new(config(seed, 8)).solve(&problem).unwrap();
        let roster = &result.roster;

        assert!(roster.is_complete());
        assert_eq!(result.score.shortage(), 0, "seed {seed}");
        assert!(shortage_by_day(&problem, roster).iter().all(|&gap| gap == 0));
        assert!(forbidden_transitions(roster, &problem.rules.forbidden).is_empty());
        for staff in 0..roster.staff_count() {
            assert!(longest_run(roster, staff) <= 5, "seed {seed} staff {staff}");
            let rest = roster.rest_count(staff);
            assert!((8..=12).contains(&rest), "seed {seed} staff {staff} rest {rest}");
        }
        assert_eq!(result.statistics.attempts_completed, 8);
    }
}

#[test]
fn test_empty_float_pool_is_short_every_weekday() {
    let mut problem = uniform_scenario(12, 14, ShiftDemand::new(2, 2, 2, 1), 2, 5);
    let staff = rosterforge_test::scenario::ids(12);
    problem.eligibility = [ShiftKind::Day, ShiftKind::Evening, ShiftKind::Night]
        .into_iter()
        .fold(Eligibility::new(), |e, shift| e.with(shift, staff.iter().copied()));
    let weekdays: Vec<bool> = (0..14).map(|day| day % 7 < 5).collect();
    problem.calendar = Calendar::from_weekdays(weekdays.clone());

    let result = RosterSolver::new(config(4, 4)).solve(&problem).unwrap();

    assert!(result.roster.is_complete());
    assert_eq!(result.score.shortage(), 10);
    let gaps = shortage_by_day(&problem, &result.roster);
    for (day, &weekday) in weekdays.iter().enumerate() {
        assert_eq!(gaps[day], u32::from(weekday), "day {day}");
    }
}

#[test]
fn test_support_keeps_ward_roster_legal() {
    let mut problem = ward_scenario();
    problem.params.support_enabled = true;
    let result = RosterSolver::new(config(11, 6)).solve(&problem).unwrap();

    let report = result.report(&problem);
    assert!(report.overlong_runs.is_empty());
    assert!(report.forbidden_transitions.is_empty());
    assert!(report.rest_deficits.is_empty());
    assert_eq!(report.total_shortage(), result.score.shortage());
}

#[test]
fn test_pinned_cells_survive() {
    let mut problem = ward_scenario();
    for day in [0, 7, 14] {
        problem.roster.pin_rest(StaffId::new(0), day).unwrap();
    }
    problem
        .roster
        .assign(StaffId::new(9), 3, Cell::Work(ShiftKind::Day))
        .unwrap();

    let result = RosterSolver::new(config(3, 6)).solve(&problem).unwrap();
    assert!(pinned_cells_preserved(&problem.roster, &result.roster));
    assert_eq!(result.roster.cell(0, 7), Cell::FixedRest);
}

#[test]
fn test_score_never_worse_than_first_attempt() {
    let problem = ward_scenario();
    let result = RosterSolver::new(config(21, 12)).solve(&problem).unwrap();

    let first = result.statistics.first_score().unwrap();
    assert!(result.score <= first);
    assert_eq!(result.statistics.best_score(), Some(result.score));
}

#[test]
fn test_seeded_runs_match_across_thread_counts() {
    let problem = ward_scenario();
    let sequential = RosterSolver::new(config(5, 10)).solve(&problem).unwrap();
    let pooled = RosterSolver::new(config(5, 10).with_thread_count(ThreadCount::Count(3)))
        .solve(&problem)
        .unwrap();
    let global = RosterSolver::new(config(5, 10).with_thread_count(ThreadCount::Auto))
        .solve(&problem)
        .unwrap();

    assert_eq!(sequential.roster, pooled.roster);
    assert_eq!(sequential.roster, global.roster);
    assert_eq!(
        sequential.statistics.best_attempt,
        pooled.statistics.best_attempt
    );
}

#[test]
fn test_single_night_staff_is_short_every_day() {
    let problem = single_night_scenario(14);
    let result = RosterSolver::new(config(1, 4)).solve(&problem).unwrap();

    assert!(result.roster.is_complete());
    assert!(shortage_by_day(&problem, &result.roster)
        .iter()
        .all(|&missing| missing > 0));
    assert!(!result.score.is_fully_staffed());
}

#[test]
fn test_invalid_problem_is_rejected() {
    let mut problem = ward_scenario();
    problem.params.max_consecutive = 0;
    let err = RosterSolver::default().solve(&problem).unwrap_err();
    assert!(matches!(err, RosterError::InvalidParameter(_)));
}

#[test]
fn test_time_limit_skips_later_attempts() {
    let problem = ward_scenario();
    let config = config(9, 100_000).with_termination_millis(1);
    let result = RosterSolver::new(config).solve(&problem).unwrap();

    let stats = &result.statistics;
    assert!(stats.attempts_completed >= 1);
    assert!(stats.attempts_skipped > 0);
    assert_eq!(
        stats.attempts_completed + stats.attempts_skipped,
        100_000
    );
    assert!(result.roster.is_complete());
}

#[test]
fn test_terminate_early_from_another_thread() {
    let problem = ward_scenario();
    let solver = RosterSolver::new(config(13, 200_000));
    assert!(!solver.terminate_early());

    let result = std::thread::scope(|s| {
        s.spawn(|| {
            while !solver.terminate_early() {
                std::thread::yield_now();
            }
        });
        solver.solve(&problem)
    })
    .unwrap();

    assert!(result.statistics.attempts_skipped > 0);
    assert!(!solver.is_solving());
}
