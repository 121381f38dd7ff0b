//! Structured quality report of a roster.
//!
//! Display layers highlight cells from this data; nothing here formats
//! messages.

use std::ops::RangeInclusive;

use rosterforge_core::{Roster, RosterProblem, ShiftKind, StaffId};

/// Headcount differing from demand on one (day, shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountGap {
    pub day: usize,
    pub shift: ShiftKind,
    pub required: u32,
    pub actual: u32,
}

/// A working run longer than `max_consecutive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlongRun {
    pub staff: StaffId,
    pub days: RangeInclusive<usize>,
}

impl OverlongRun {
    /// Number of working days in the run.
    pub fn day_count(&self) -> usize {
        self.days.end() - self.days.start() + 1
    }
}

/// `from` worked on `day - 1` followed by `to` on `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenTransition {
    pub staff: StaffId,
    pub day: usize,
    pub from: ShiftKind,
    pub to: ShiftKind,
}

/// A staff member below the minimum rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestDeficit {
    pub staff: StaffId,
    pub rest: u32,
    pub required: u32,
}

/// Quality data for one roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterReport {
    /// (day, shift) pairs below demand.
    pub shortages: Vec<HeadcountGap>,
    /// (day, shift) pairs above demand. Informational, not a defect.
    pub surpluses: Vec<HeadcountGap>,
    pub overlong_runs: Vec<OverlongRun>,
    pub forbidden_transitions: Vec<ForbiddenTransition>,
    pub rest_deficits: Vec<RestDeficit>,
    /// Rest days per staff member, in row order.
    pub rest_counts: Vec<(StaffId, u32)>,
}

impl RosterReport {
    /// Analyzes `roster` against the rules and demand of `problem`.
    ///
    /// # Example
    ///
    /// ```
    /// use rosterforge_core::{Calendar, Cell, Eligibility, Roster, RosterParameters,
    ///     RosterProblem, ShiftDemand, ShiftKind, StaffId};
    /// use rosterforge_solver::RosterReport;
    ///
    /// let mut roster = Roster::new([StaffId::new(0)], 2).unwrap();
    /// roster.set_cell(0, 0, Cell::Work(ShiftKind::Night));
    /// roster.set_cell(0, 1, Cell::Work(ShiftKind::Day));
    /// let problem = RosterProblem::new(
    ///     roster.clone(),
    ///     Calendar::all_weekdays(2),
    ///     Eligibility::new(),
    ///     RosterParameters::new(ShiftDemand::default()).with_min_rest_days(0),
    /// );
    ///
    /// let report = RosterReport::analyze(&problem, &roster);
    /// assert_eq!(report.forbidden_transitions.len(), 1);
    /// assert!(!report.is_clean());
    /// ```
    pub fn analyze(problem: &RosterProblem, roster: &Roster) -> Self {
        let mut report = RosterReport::default();
        let max_run = problem.params.max_consecutive as usize;
        let min_rest = problem.params.min_rest_days;
        let table = &problem.rules.forbidden;

        for day in 0..roster.days() {
            for shift in ShiftKind::ALL {
                let gap = HeadcountGap {
                    day,
                    shift,
                    required: problem.required(day, shift),
                    actual: roster.headcount(day, shift),
                };
                if gap.actual < gap.required {
                    report.shortages.push(gap);
                } else if gap.actual > gap.required {
                    report.surpluses.push(gap);
                }
            }
        }

        for (staff, row) in roster.rows().iter().enumerate() {
            let id = row.staff;
            let cells = &row.cells;

            let mut start = None;
            for day in 0..=cells.len() {
                let working = cells.get(day).is_some_and(|c| c.is_working());
                match (working, start) {
                    (true, None) => start = Some(day),
                    (false, Some(first)) => {
                        if day - first > max_run {
                            report.overlong_runs.push(OverlongRun {
                                staff: id,
                                days: first..=day - 1,
                            });
                        }
                        start = None;
                    }
                    _ => {}
                }
            }

            for day in 1..cells.len() {
                if let (Some(from), Some(to)) = (cells[day - 1].shift(), cells[day].shift()) {
                    if table.is_forbidden(from, to) {
                        report.forbidden_transitions.push(ForbiddenTransition {
                            staff: id,
                            day,
                            from,
                            to,
                        });
                    }
                }
            }

            let rest = roster.rest_count(staff);
            if rest < min_rest {
                report.rest_deficits.push(RestDeficit {
                    staff: id,
                    rest,
                    required: min_rest,
                });
            }
            report.rest_counts.push((id, rest));
        }

        report
    }

    /// Total missing staff-days.
    pub fn total_shortage(&self) -> u32 {
        self.shortages.iter().map(|g| g.required - g.actual).sum()
    }

    /// True when no shortage, overlong run, forbidden transition or rest
    /// deficit was found.
    pub fn is_clean(&self) -> bool {
        self.shortages.is_empty()
            && self.overlong_runs.is_empty()
            && self.forbidden_transitions.is_empty()
            && self.rest_deficits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_core::{Cell, RosterRow, ShiftDemand};
    use rosterforge_test::scenario::uniform_scenario;

    fn roster(rows: &[&str]) -> Roster {
        Roster::from_rows(
            rows.iter()
                .enumerate()
                .map(|(i, line)| {
                    let cells: Vec<Cell> =
                        line.split_whitespace().map(|c| c.parse().unwrap()).collect();
                    RosterRow::new(StaffId::new(i as u32), cells)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_overlong_runs_and_transitions() {
        let problem = uniform_scenario(2, 7, ShiftDemand::default(), 1, 3);
        let r = roster(&["D D D D OFF N D", "OFF E E E OFF OFF OFF"]);
        let report = RosterReport::analyze(&problem, &r);

        assert_eq!(
            report.overlong_runs,
            vec![OverlongRun {
                staff: StaffId::new(0),
                days: 0..=3,
            }]
        );
        assert_eq!(report.overlong_runs[0].day_count(), 4);
        assert_eq!(
            report.forbidden_transitions,
            vec![ForbiddenTransition {
                staff: StaffId::new(0),
                day: 6,
                from: ShiftKind::Night,
                to: ShiftKind::Day,
            }]
        );
    }

    #[test]
    fn test_run_reaching_period_end() {
        let problem = uniform_scenario(1, 5, ShiftDemand::default(), 0, 2);
        let report = RosterReport::analyze(&problem, &roster(&["OFF N N N N"]));
        assert_eq!(report.overlong_runs[0].days, 1..=4);
    }

    #[test]
    fn test_headcount_gaps() {
        let problem = uniform_scenario(3, 1, ShiftDemand::new(1, 1, 0, 0), 0, 5);
        let report = RosterReport::analyze(&problem, &roster(&["D", "D", "N"]));

        assert_eq!(report.total_shortage(), 1);
        assert_eq!(report.shortages[0].shift, ShiftKind::Evening);
        let surplus: Vec<ShiftKind> = report.surpluses.iter().map(|g| g.shift).collect();
        assert_eq!(surplus, vec![ShiftKind::Day, ShiftKind::Night]);
    }

    #[test]
    fn test_rest_deficits_and_clean() {
        let problem = uniform_scenario(2, 3, ShiftDemand::default(), 2, 5);
        let report = RosterReport::analyze(&problem, &roster(&["OFF R E", "E OFF E"]));

        assert_eq!(
            report.rest_deficits,
            vec![RestDeficit {
                staff: StaffId::new(1),
                rest: 1,
                required: 2,
            }]
        );
        assert_eq!(
            report.rest_counts,
            vec![(StaffId::new(0), 2), (StaffId::new(1), 1)]
        );
        assert!(!report.is_clean());

        let clean = RosterReport::analyze(&problem, &roster(&["OFF R E", "OFF OFF E"]));
        assert!(clean.is_clean());
    }
}
