//! Greedy day-by-day construction.

use rosterforge_core::{Cell, ShiftKind};
use smallvec::SmallVec;
use tracing::trace;

use super::{Phase, PhaseSummary};
use crate::constraint::ConstraintEvaluator;
use crate::recording::RecordingRoster;
use crate::scope::AttemptScope;

/// Fills each day's demand in shift priority order.
///
/// The candidates for a day are staff with an empty cell whose working days
/// are still below `days - min_rest_days`, so the minimum rest stays
/// reachable. They are offered least-worked first, ties broken by the
/// attempt's random rank. A (staff, shift) pair is legal when the
/// tentatively written cell passes the run and transition checks.
///
/// A candidate may take the seat of someone already holding a full shift
/// when that holder can move to another open shift of the same day. Staff
/// with one legal shift therefore do not lose it to staff with several.
///
/// Running out of candidates is not an error; the gap shows up as
/// shortage in the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstruction;

impl GreedyConstruction {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for GreedyConstruction {
    fn solve(&mut self, scope: &mut AttemptScope<'_>) -> PhaseSummary {
        let index = scope.index();
        let problem = index.problem();
        let evaluator = ConstraintEvaluator::for_problem(problem);
        let days = index.days();
        let staff_count = index.staff_count();
        let quota = days.saturating_sub(problem.params.min_rest_days as usize) as u32;

        let mut worked: Vec<u32> = (0..staff_count)
            .map(|staff| scope.roster().work_count(staff))
            .collect();
        let mut steps = 0;

        for day in 0..days {
            let mut idle: Vec<usize> = (0..staff_count)
                .filter(|&staff| {
                    worked[staff] < quota && scope.roster().cell(staff, day).is_unassigned()
                })
                .collect();
            idle.sort_by_key(|&staff| (worked[staff], scope.tie_rank(staff)));

            let mut legal = Vec::with_capacity(idle.len());
            let mut recording = RecordingRoster::new(scope.roster_mut());
            for &staff in &idle {
                let mut shifts: SmallVec<[ShiftKind; ShiftKind::COUNT]> = SmallVec::new();
                for &shift in &problem.rules.priority {
                    if !index.is_eligible(staff, shift) {
                        continue;
                    }
                    recording.set(staff, day, Cell::Work(shift));
                    let roster = recording.roster();
                    if evaluator.is_adjacency_legal(roster, staff, day, shift)
                        && evaluator.is_consecutive_run_legal(roster, staff, day)
                    {
                        shifts.push(shift);
                    }
                    recording.undo_changes();
                }
                legal.push(shifts);
            }

            let mut plan = DayPlan::new(legal);
            for &shift in &problem.rules.priority {
                let required = problem.required(day, shift);
                let assigned = scope.roster().headcount(day, shift);
                if assigned >= required {
                    continue;
                }
                plan.open(shift, (required - assigned) as usize);
                for candidate in 0..idle.len() {
                    if plan.is_filled(shift) {
                        break;
                    }
                    plan.place(candidate);
                }
            }

            for slot in &plan.slots {
                for &candidate in &slot.holders {
                    let staff = idle[candidate];
                    scope.roster_mut().set_cell(staff, day, Cell::Work(slot.shift));
                    worked[staff] += 1;
                    steps += 1;
                }
                if slot.holders.len() < slot.seats {
                    trace!(
                        event = "shortfall",
                        day,
                        shift = %slot.shift,
                        missing = slot.seats - slot.holders.len(),
                    );
                }
            }
        }

        PhaseSummary::completed(steps)
    }

    fn phase_type_name(&self) -> &'static str {
        "GreedyConstruction"
    }
}

struct Slot {
    shift: ShiftKind,
    seats: usize,
    holders: Vec<usize>,
}

/// Staff-to-shift matching for a single day.
///
/// Candidates are indices into the day's idle list. Placing a candidate
/// searches for an augmenting path through the open slots, so a seat
/// that is taken never becomes empty again.
struct DayPlan {
    legal: Vec<SmallVec<[ShiftKind; ShiftKind::COUNT]>>,
    placed: Vec<bool>,
    slots: SmallVec<[Slot; ShiftKind::COUNT]>,
}

impl DayPlan {
    fn new(legal: Vec<SmallVec<[ShiftKind; ShiftKind::COUNT]>>) -> Self {
        Self {
            placed: vec![false; legal.len()],
            legal,
            slots: SmallVec::new(),
        }
    }

    fn open(&mut self, shift: ShiftKind, seats: usize) {
        self.slots.push(Slot {
            shift,
            seats,
            holders: Vec::with_capacity(seats),
        });
    }

    fn is_filled(&self, shift: ShiftKind) -> bool {
        self.slots
            .iter()
            .find(|slot| slot.shift == shift)
            .map_or(true, |slot| slot.holders.len() >= slot.seats)
    }

    fn place(&mut self, candidate: usize) -> bool {
        if self.placed[candidate] {
            return false;
        }
        let mut visited = [false; ShiftKind::COUNT];
        let placed = self.augment(candidate, &mut visited);
        self.placed[candidate] = placed;
        placed
    }

    fn augment(&mut self, candidate: usize, visited: &mut [bool; ShiftKind::COUNT]) -> bool {
        for i in 0..self.legal[candidate].len() {
            let shift = self.legal[candidate][i];
            let Some(slot) = self.slots.iter().position(|slot| slot.shift == shift) else {
                continue;
            };
            if visited[shift.index()] {
                continue;
            }
            visited[shift.index()] = true;

            if self.slots[slot].holders.len() < self.slots[slot].seats {
                self.slots[slot].holders.push(candidate);
                return true;
            }
            for seat in 0..self.slots[slot].holders.len() {
                let holder = self.slots[slot].holders[seat];
                if self.augment(holder, visited) {
                    self.slots[slot].holders[seat] = candidate;
                    return true;
                }
            }
        }
        false
    }
}
