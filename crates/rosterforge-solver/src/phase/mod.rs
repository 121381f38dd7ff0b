//! Generation phases.
//!
//! Every attempt runs the same four phases in order:
//! - [`GreedyConstruction`](construction::GreedyConstruction): fills demand day by day
//! - [`RestBackfill`](backfill::RestBackfill): tops up rest days and closes every gap
//! - [`SupportResolver`](support::SupportResolver): moves rest between two shift pools
//! - [`FairnessSearch`](fairness::FairnessSearch): evens out rest between staff

pub mod backfill;
pub mod construction;
pub mod fairness;
pub mod support;

use std::fmt::{self, Debug};

use crate::scope::AttemptScope;

/// A phase of one generation attempt.
///
/// Phases mutate the attempt's roster in place and never touch pinned
/// cells.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, scope: &mut AttemptScope<'_>) -> PhaseSummary;

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}

/// Why a phase stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// A single-pass phase finished its pass.
    Completed,
    /// The step limit was reached.
    StepLimit,
    /// No move satisfying the hard rules was found.
    NoImprovingMove,
    /// The balance target was already met.
    Balanced,
    /// The phase is switched off for this problem.
    Disabled,
}

impl StopReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StopReason::Completed => "completed",
            StopReason::StepLimit => "step_limit",
            StopReason::NoImprovingMove => "no_improving_move",
            StopReason::Balanced => "balanced",
            StopReason::Disabled => "disabled",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one phase run: committed steps and the stopping reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub steps: u64,
    pub stop: StopReason,
}

impl PhaseSummary {
    pub fn new(steps: u64, stop: StopReason) -> Self {
        Self { steps, stop }
    }

    pub fn completed(steps: u64) -> Self {
        Self::new(steps, StopReason::Completed)
    }

    pub fn disabled() -> Self {
        Self::new(0, StopReason::Disabled)
    }
}
