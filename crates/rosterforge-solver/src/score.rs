//! Roster scoring: weighted headcount shortage plus rest variance.

use rosterforge_core::{Roster, RosterProblem, RosterScore, ShiftKind};

/// Scores finished rosters.
///
/// Pure and idempotent: scoring the same roster twice gives the same score.
///
/// # Example
///
/// ```
/// use rosterforge_core::{Calendar, Cell, Eligibility, Roster, RosterParameters,
///     RosterProblem, ShiftDemand, ShiftKind, StaffId};
/// use rosterforge_solver::RosterScorer;
///
/// let mut roster = Roster::new([StaffId::new(0), StaffId::new(1)], 2).unwrap();
/// roster.set_cell(0, 0, Cell::Work(ShiftKind::Day));
/// let problem = RosterProblem::new(
///     roster.clone(),
///     Calendar::all_weekdays(2),
///     Eligibility::new(),
///     RosterParameters::new(ShiftDemand::new(1, 0, 0, 0)),
/// );
///
/// let score = RosterScorer::default().score(&problem, &roster);
/// assert_eq!(score.shortage(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RosterScorer {
    shortage_weight: f64,
}

impl RosterScorer {
    pub fn new(shortage_weight: f64) -> Self {
        Self { shortage_weight }
    }

    pub fn shortage_weight(&self) -> f64 {
        self.shortage_weight
    }

    /// Missing staff-days over every (day, shift). Surplus never offsets it.
    pub fn shortage(&self, problem: &RosterProblem, roster: &Roster) -> u32 {
        (0..roster.days())
            .flat_map(|day| ShiftKind::ALL.map(|shift| (day, shift)))
            .map(|(day, shift)| {
                problem
                    .required(day, shift)
                    .saturating_sub(roster.headcount(day, shift))
            })
            .sum()
    }

    /// Population variance of per-staff rest counts.
    pub fn rest_variance(&self, roster: &Roster) -> f64 {
        let rest = roster.rest_counts();
        if rest.is_empty() {
            return 0.0;
        }
        let n = rest.len() as f64;
        let mean = rest.iter().map(|&r| r as f64).sum::<f64>() / n;
        rest.iter()
            .map(|&r| {
                let d = r as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n
    }

    pub fn score(&self, problem: &RosterProblem, roster: &Roster) -> RosterScore {
        RosterScore::new(
            self.shortage(problem, roster),
            self.rest_variance(roster),
            self.shortage_weight,
        )
    }
}

impl Default for RosterScorer {
    fn default() -> Self {
        Self::new(RosterScore::DEFAULT_SHORTAGE_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_core::{Calendar, Cell, ShiftDemand};
    use rosterforge_test::scenario::uniform_scenario;

    #[test]
    fn test_shortage_ignores_surplus() {
        let mut problem = uniform_scenario(3, 2, ShiftDemand::new(1, 1, 0, 0), 0, 5);
        let roster = &mut problem.roster;
        roster.set_cell(0, 0, Cell::Work(ShiftKind::Day));
        roster.set_cell(1, 0, Cell::Work(ShiftKind::Day));
        roster.set_cell(2, 0, Cell::Work(ShiftKind::Day));
        roster.set_cell(0, 1, Cell::Work(ShiftKind::Evening));

        let scorer = RosterScorer::default();
        // Day 0 misses an evening, day 1 misses a day shift.
        assert_eq!(scorer.shortage(&problem, &problem.roster), 2);
    }

    #[test]
    fn test_weekday_only_demand() {
        let mut problem = uniform_scenario(1, 2, ShiftDemand::new(0, 0, 0, 1), 0, 5);
        problem.calendar = Calendar::from_weekdays(vec![true, false]);
        let scorer = RosterScorer::default();
        assert_eq!(scorer.shortage(&problem, &problem.roster), 1);
    }

    #[test]
    fn test_rest_variance() {
        let mut problem = uniform_scenario(2, 4, ShiftDemand::default(), 0, 5);
        let roster = &mut problem.roster;
        roster.set_cell(0, 0, Cell::Rest);
        roster.set_cell(0, 1, Cell::FixedRest);
        roster.set_cell(0, 2, Cell::Rest);
        // Rest counts 3 and 0: mean 1.5, variance 2.25.
        assert_eq!(RosterScorer::default().rest_variance(roster), 2.25);
    }

    #[test]
    fn test_score_is_idempotent() {
        let problem = uniform_scenario(3, 5, ShiftDemand::new(1, 1, 1, 0), 1, 5);
        let scorer = RosterScorer::new(10.0);
        let a = scorer.score(&problem, &problem.roster);
        let b = scorer.score(&problem, &problem.roster);
        assert_eq!(a, b);
        assert_eq!(a.shortage(), 15);
        assert_eq!(a.total(), 150.0);
    }
}
