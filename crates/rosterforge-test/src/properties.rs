//! Pure checks over generated rosters.

use rosterforge_core::{Roster, RosterProblem, ShiftKind, StaffId, TransitionTable};

/// Staff ids of a roster in row order.
pub fn staff_ids(roster: &Roster) -> Vec<StaffId> {
    roster.staff().collect()
}

/// Longest run of consecutive working days in a row.
pub fn longest_run(roster: &Roster, staff: usize) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for cell in roster.row(staff) {
        if cell.is_working() {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Every `(row, day)` where the shift worked on `day - 1` may not be
/// followed by the shift worked on `day`.
pub fn forbidden_transitions(roster: &Roster, table: &TransitionTable) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for staff in 0..roster.staff_count() {
        let row = roster.row(staff);
        for day in 1..row.len() {
            if table.forbids(row[day - 1], row[day]) {
                found.push((staff, day));
            }
        }
    }
    found
}

/// Missing staff-days per day, summed over shifts.
pub fn shortage_by_day(problem: &RosterProblem, roster: &Roster) -> Vec<u32> {
    (0..roster.days())
        .map(|day| {
            ShiftKind::ALL
                .iter()
                .map(|&shift| {
                    problem
                        .required(day, shift)
                        .saturating_sub(roster.headcount(day, shift))
                })
                .sum()
        })
        .collect()
}

/// True when every non-empty cell of `skeleton` is unchanged in `roster`.
pub fn pinned_cells_preserved(skeleton: &Roster, roster: &Roster) -> bool {
    skeleton.rows().iter().all(|row| {
        roster.row_of(row.staff).is_some_and(|cells| {
            row.cells
                .iter()
                .zip(cells)
                .all(|(before, after)| before.is_unassigned() || before == after)
        })
    })
}
