//! Hard-rule checks for a single roster cell.
//!
//! Checks are evaluated after a candidate value has been written into the
//! roster, so they always see the cell as it would be committed.

use rosterforge_core::{Cell, Roster, RosterProblem, ShiftKind, TransitionTable};

/// Evaluates the consecutive-run and transition rules for one cell.
///
/// Pure: never mutates the roster. The run check walks at most
/// `max_consecutive + 1` cells each way; the transition check looks at the
/// two neighbouring days only.
///
/// # Example
///
/// ```
/// use rosterforge_core::{Cell, Roster, ShiftKind, StaffId, TransitionTable};
/// use rosterforge_solver::ConstraintEvaluator;
///
/// let mut roster = Roster::new([StaffId::new(0)], 3).unwrap();
/// roster.set_cell(0, 0, Cell::Work(ShiftKind::Night));
/// roster.set_cell(0, 1, Cell::Work(ShiftKind::Day));
///
/// let table = TransitionTable::default();
/// let evaluator = ConstraintEvaluator::new(5, &table);
/// assert!(!evaluator.is_cell_legal(&roster, 0, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    max_consecutive: usize,
    forbidden: &'a TransitionTable,
}

impl<'a> ConstraintEvaluator<'a> {
    pub fn new(max_consecutive: u32, forbidden: &'a TransitionTable) -> Self {
        Self {
            max_consecutive: max_consecutive as usize,
            forbidden,
        }
    }

    /// Evaluator using the problem's run limit and transition table.
    pub fn for_problem(problem: &'a RosterProblem) -> Self {
        Self::new(problem.params.max_consecutive, &problem.rules.forbidden)
    }

    /// Whether the working run through `day` stays within the limit.
    ///
    /// A non-working cell always passes.
    pub fn is_consecutive_run_legal(&self, roster: &Roster, staff: usize, day: usize) -> bool {
        let row = roster.row(staff);
        if !row[day].is_working() {
            return true;
        }
        let cap = self.max_consecutive + 1;
        let before = row[..=day]
            .iter()
            .rev()
            .take(cap)
            .take_while(|c| c.is_working())
            .count();
        let after = row[day + 1..]
            .iter()
            .take(cap)
            .take_while(|c| c.is_working())
            .count();
        before + after <= self.max_consecutive
    }

    /// Whether working `candidate` on `day` is allowed next to both neighbours.
    pub fn is_adjacency_legal(
        &self,
        roster: &Roster,
        staff: usize,
        day: usize,
        candidate: ShiftKind,
    ) -> bool {
        let row = roster.row(staff);
        let cell = Cell::Work(candidate);
        let after_previous = day == 0 || !self.forbidden.forbids(row[day - 1], cell);
        let before_next = day + 1 >= row.len() || !self.forbidden.forbids(cell, row[day + 1]);
        after_previous && before_next
    }

    /// Both checks for whatever the cell currently holds.
    pub fn is_cell_legal(&self, roster: &Roster, staff: usize, day: usize) -> bool {
        match roster.cell(staff, day) {
            Cell::Work(shift) => {
                self.is_adjacency_legal(roster, staff, day, shift)
                    && self.is_consecutive_run_legal(roster, staff, day)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_core::StaffId;

    fn row(codes: &str) -> Roster {
        let mut roster = Roster::new([StaffId::new(0)], codes.split_whitespace().count()).unwrap();
        for (day, code) in codes.split_whitespace().enumerate() {
            if code != "." {
                roster.set_cell(0, day, code.parse().unwrap());
            }
        }
        roster
    }

    #[test]
    fn test_run_counts_backward_inclusive() {
        let table = TransitionTable::default();
        let evaluator = ConstraintEvaluator::new(5, &table);
        let ok = row("D D D D D OFF");
        assert!(evaluator.is_consecutive_run_legal(&ok, 0, 4));
        let long = row("D D D D D D");
        assert!(!evaluator.is_consecutive_run_legal(&long, 0, 5));
    }

    #[test]
    fn test_run_counts_forward_neighbours() {
        let table = TransitionTable::default();
        let evaluator = ConstraintEvaluator::new(3, &table);
        // Filling the gap would join two runs into one of length 5.
        let roster = row("D D D D D");
        assert!(!evaluator.is_consecutive_run_legal(&roster, 0, 2));
        let split = row("D D OFF D D");
        assert!(evaluator.is_consecutive_run_legal(&split, 0, 1));
        assert!(evaluator.is_consecutive_run_legal(&split, 0, 2));
    }

    #[test]
    fn test_rest_and_empty_stop_runs() {
        let table = TransitionTable::default();
        let evaluator = ConstraintEvaluator::new(2, &table);
        let roster = row("D . D D R D D");
        assert!(evaluator.is_consecutive_run_legal(&roster, 0, 3));
        assert!(evaluator.is_consecutive_run_legal(&roster, 0, 6));
    }

    #[test]
    fn test_adjacency_both_sides() {
        let table = TransitionTable::default();
        let evaluator = ConstraintEvaluator::new(5, &table);
        let roster = row("N . D");
        assert!(!evaluator.is_adjacency_legal(&roster, 0, 1, ShiftKind::Day));
        assert!(!evaluator.is_adjacency_legal(&roster, 0, 1, ShiftKind::Night));
        let free = row("OFF . OFF");
        for shift in ShiftKind::ALL {
            assert!(evaluator.is_adjacency_legal(&free, 0, 1, shift));
        }
    }

    #[test]
    fn test_adjacency_at_period_edges() {
        let table = TransitionTable::default();
        let evaluator = ConstraintEvaluator::new(5, &table);
        let roster = row(". N");
        assert!(evaluator.is_adjacency_legal(&roster, 0, 0, ShiftKind::Day));
        assert!(evaluator.is_adjacency_legal(&roster, 0, 1, ShiftKind::Night));
        assert!(!evaluator.is_adjacency_legal(&row("N ."), 0, 1, ShiftKind::Evening));
    }

    #[test]
    fn test_custom_table() {
        let table = TransitionTable::empty();
        let evaluator = ConstraintEvaluator::new(5, &table);
        assert!(evaluator.is_cell_legal(&row("N D"), 0, 1));
    }
}
