//! Rest fairness local search.

use std::cmp::Reverse;

use rosterforge_config::{FairnessConfig, DEFAULT_STEP_LIMIT};
use rosterforge_core::Cell;

use super::{Phase, PhaseSummary, StopReason};
use crate::constraint::ConstraintEvaluator;
use crate::recording::RecordingRoster;
use crate::scope::AttemptScope;

/// Swaps a rest day from the most-rested to the least-rested staff member.
///
/// Each step hands one of a poor member's shifts to a rich member on a day
/// where the rich member rests, is eligible for that shift, and can take it
/// without breaking the run or transition rules. Pairs are tried from the
/// extremes inwards while their rest gap is at least two, and a rich member
/// never drops below the minimum rest. Stops once the overall gap is at
/// most one day, when no pair has a swap, or at the step limit.
#[derive(Debug, Clone, Copy)]
pub struct FairnessSearch {
    step_limit: u64,
}

impl FairnessSearch {
    pub fn new(step_limit: u64) -> Self {
        Self { step_limit }
    }

    pub fn from_config(config: &FairnessConfig) -> Self {
        Self::new(config.step_limit)
    }
}

impl Default for FairnessSearch {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_LIMIT)
    }
}

impl Phase for FairnessSearch {
    fn solve(&mut self, scope: &mut AttemptScope<'_>) -> PhaseSummary {
        let min_rest = scope.problem().params.min_rest_days;
        for step in 0..self.step_limit {
            let rest = scope.roster().rest_counts();
            let mut poor: Vec<usize> = (0..rest.len()).collect();
            poor.sort_by_key(|&s| (rest[s], s));
            let mut rich = poor.clone();
            rich.sort_by_key(|&s| (Reverse(rest[s]), s));

            let (Some(&richest), Some(&poorest)) = (rich.first(), poor.first()) else {
                return PhaseSummary::new(step, StopReason::Balanced);
            };
            if rest[richest] <= rest[poorest] + 1 {
                return PhaseSummary::new(step, StopReason::Balanced);
            }
            if !swap_any(scope, &rest, &rich, &poor, min_rest) {
                return PhaseSummary::new(step, StopReason::NoImprovingMove);
            }
        }

        PhaseSummary::new(self.step_limit, StopReason::StepLimit)
    }

    fn phase_type_name(&self) -> &'static str {
        "FairnessSearch"
    }
}

fn swap_any(
    scope: &mut AttemptScope<'_>,
    rest: &[u32],
    rich: &[usize],
    poor: &[usize],
    min_rest: u32,
) -> bool {
    for &giver in rich {
        if rest[giver] <= min_rest {
            break;
        }
        for &taker in poor {
            if rest[giver] < rest[taker] + 2 {
                break;
            }
            if swap_rest(scope, giver, taker) {
                return true;
            }
        }
    }
    false
}

fn swap_rest(scope: &mut AttemptScope<'_>, richest: usize, poorest: usize) -> bool {
    let index = scope.index();
    let evaluator = ConstraintEvaluator::for_problem(index.problem());
    let mut recording = RecordingRoster::new(scope.roster_mut());

    for day in 0..index.days() {
        let roster = recording.roster();
        if roster.cell(richest, day) != Cell::Rest
            || index.is_pinned(richest, day)
            || index.is_pinned(poorest, day)
        {
            continue;
        }
        let Some(shift) = roster.cell(poorest, day).shift() else {
            continue;
        };
        if !index.is_eligible(richest, shift) {
            continue;
        }

        recording.set(richest, day, Cell::Work(shift));
        recording.set(poorest, day, Cell::Rest);
        if evaluator.is_cell_legal(recording.roster(), richest, day) {
            recording.commit();
            return true;
        }
        recording.undo_changes();
    }
    false
}
