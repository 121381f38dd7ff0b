//! Cross-category support resolver.
//!
//! When one shift pool rests noticeably more on average than another,
//! rest is moved across through a three-way chain on a single day:
//!
//! ```text
//!            before            after
//! donor      OFF          ->   donor shift
//! pivot      donor shift  ->   recipient shift
//! recipient  recip. shift ->   OFF
//! ```
//!
//! Headcount of both shifts is unchanged by every chain.

use std::cmp::Reverse;

use rosterforge_config::{SupportConfig, DEFAULT_STEP_LIMIT};
use rosterforge_core::{Cell, ShiftKind};
use tracing::trace;

use super::{Phase, PhaseSummary, StopReason};
use crate::constraint::ConstraintEvaluator;
use crate::recording::RecordingRoster;
use crate::scope::AttemptScope;

/// Moves rest days from the better-rested pool to the other one.
///
/// Pools are the staff eligible for `primary` and for `secondary`. A chain
/// fires only while the average rest gap strictly exceeds `threshold`; the
/// donor is the most-rested member of the richer pool and the recipient
/// the least-rested member of the poorer pool. Runs only when the
/// problem's `support_enabled` flag is set.
#[derive(Debug, Clone)]
pub struct SupportResolver {
    primary: ShiftKind,
    secondary: ShiftKind,
    threshold: f64,
    step_limit: u64,
}

impl SupportResolver {
    /// Resolver between two pools with a one-day threshold.
    pub fn new(primary: ShiftKind, secondary: ShiftKind) -> Self {
        Self {
            primary,
            secondary,
            threshold: 1.0,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    pub fn from_config(config: &SupportConfig) -> Self {
        Self::new(config.primary, config.secondary)
            .with_threshold(config.threshold)
            .with_step_limit(config.step_limit)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = step_limit;
        self
    }
}

impl Default for SupportResolver {
    fn default() -> Self {
        Self::new(ShiftKind::Night, ShiftKind::Evening)
    }
}

/// One side of a chain: who gives rest away and on which shift.
struct Direction<'p> {
    donor_pool: &'p [usize],
    donor_shift: ShiftKind,
    recipient_pool: &'p [usize],
    recipient_shift: ShiftKind,
}

fn average_rest(rest: &[u32], pool: &[usize]) -> f64 {
    pool.iter().map(|&s| rest[s] as f64).sum::<f64>() / pool.len() as f64
}

impl Phase for SupportResolver {
    fn solve(&mut self, scope: &mut AttemptScope<'_>) -> PhaseSummary {
        let index = scope.index();
        let params = &index.problem().params;
        if !params.support_enabled {
            return PhaseSummary::disabled();
        }

        let primary_pool = index.pool(self.primary);
        let secondary_pool = index.pool(self.secondary);
        if primary_pool.is_empty() || secondary_pool.is_empty() {
            return PhaseSummary::new(0, StopReason::Balanced);
        }

        for step in 0..self.step_limit {
            let rest = scope.roster().rest_counts();
            let gap = average_rest(&rest, &secondary_pool) - average_rest(&rest, &primary_pool);

            let direction = if gap > self.threshold {
                Direction {
                    donor_pool: &secondary_pool,
                    donor_shift: self.secondary,
                    recipient_pool: &primary_pool,
                    recipient_shift: self.primary,
                }
            } else if -gap > self.threshold {
                Direction {
                    donor_pool: &primary_pool,
                    donor_shift: self.primary,
                    recipient_pool: &secondary_pool,
                    recipient_shift: self.secondary,
                }
            } else {
                return PhaseSummary::new(step, StopReason::Balanced);
            };

            let Some(&donor) = direction
                .donor_pool
                .iter()
                .max_by_key(|&&s| (rest[s], Reverse(s)))
            else {
                return PhaseSummary::new(step, StopReason::NoImprovingMove);
            };
            let Some(&recipient) = direction
                .recipient_pool
                .iter()
                .filter(|&&s| s != donor)
                .min_by_key(|&&s| (rest[s], s))
            else {
                return PhaseSummary::new(step, StopReason::NoImprovingMove);
            };
            if rest[donor] <= params.min_rest_days {
                return PhaseSummary::new(step, StopReason::NoImprovingMove);
            }

            match apply_chain(scope, &direction, donor, recipient) {
                Some(day) => trace!(
                    event = "support_chain",
                    attempt = scope.attempt(),
                    day,
                    donor,
                    recipient,
                    gap,
                ),
                None => return PhaseSummary::new(step, StopReason::NoImprovingMove),
            }
        }

        PhaseSummary::new(self.step_limit, StopReason::StepLimit)
    }

    fn phase_type_name(&self) -> &'static str {
        "SupportResolver"
    }
}

/// Commits the first legal chain for `donor` and `recipient`, returning its day.
fn apply_chain(
    scope: &mut AttemptScope<'_>,
    direction: &Direction<'_>,
    donor: usize,
    recipient: usize,
) -> Option<usize> {
    let index = scope.index();
    let evaluator = ConstraintEvaluator::for_problem(index.problem());
    let days = index.days();
    let donor_work = Cell::Work(direction.donor_shift);
    let recipient_work = Cell::Work(direction.recipient_shift);

    let mut recording = RecordingRoster::new(scope.roster_mut());
    for day in 0..days {
        let roster = recording.roster();
        if roster.cell(donor, day) != Cell::Rest || index.is_pinned(donor, day) {
            continue;
        }
        if roster.cell(recipient, day) != recipient_work || index.is_pinned(recipient, day) {
            continue;
        }

        let pivots: Vec<usize> = direction
            .donor_pool
            .iter()
            .copied()
            .filter(|&pivot| {
                pivot != donor
                    && pivot != recipient
                    && index.is_eligible(pivot, direction.recipient_shift)
                    && !index.is_pinned(pivot, day)
                    && roster.cell(pivot, day) == donor_work
                    && (day + 1 == days || roster.cell(pivot, day + 1).is_rest())
            })
            .collect();

        for pivot in pivots {
            recording.set(donor, day, donor_work);
            recording.set(pivot, day, recipient_work);
            recording.set(recipient, day, Cell::Rest);

            let roster = recording.roster();
            if [donor, pivot, recipient]
                .iter()
                .all(|&staff| evaluator.is_cell_legal(roster, staff, day))
            {
                recording.commit();
                return Some(day);
            }
            recording.undo_changes();
        }
    }
    None
}
