//! Rest-day backfill.

use rosterforge_core::Cell;

use super::{Phase, PhaseSummary};
use crate::scope::AttemptScope;

/// Writes `Rest` into empty cells.
///
/// First tops every staff member up to `min_rest_days` using their
/// earliest empty cells, then (unless built with [`top_up_only`]) turns
/// every remaining empty cell into rest so the roster is complete.
/// Non-empty cells are never touched, so rest can only grow.
///
/// [`top_up_only`]: RestBackfill::top_up_only
#[derive(Debug, Clone, Copy)]
pub struct RestBackfill {
    close_gaps: bool,
}

impl RestBackfill {
    pub fn new() -> Self {
        Self { close_gaps: true }
    }

    /// Only reaches the minimum; leaves other empty cells empty.
    pub fn top_up_only() -> Self {
        Self { close_gaps: false }
    }
}

impl Default for RestBackfill {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for RestBackfill {
    fn solve(&mut self, scope: &mut AttemptScope<'_>) -> PhaseSummary {
        let min_rest = scope.problem().params.min_rest_days;
        let roster = scope.roster_mut();
        let days = roster.days();
        let mut steps = 0;

        for staff in 0..roster.staff_count() {
            let mut rest = roster.rest_count(staff);
            for day in 0..days {
                if rest >= min_rest {
                    break;
                }
                if roster.cell(staff, day).is_unassigned() {
                    roster.set_cell(staff, day, Cell::Rest);
                    rest += 1;
                    steps += 1;
                }
            }

            if self.close_gaps {
                for day in 0..days {
                    if roster.cell(staff, day).is_unassigned() {
                        roster.set_cell(staff, day, Cell::Rest);
                        steps += 1;
                    }
                }
            }
        }

        PhaseSummary::completed(steps)
    }

    fn phase_type_name(&self) -> &'static str {
        "RestBackfill"
    }
}
