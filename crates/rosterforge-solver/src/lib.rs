//! RosterForge Solver Engine
//!
//! This crate provides the roster generation pipeline:
//! - Constraint evaluation (run length, forbidden transitions)
//! - Phases (greedy construction, rest backfill, support resolver, fairness search)
//! - Scoring of finished rosters
//! - Termination conditions
//! - The multi-restart [`RosterSolver`] and its statistics
//! - Structured roster analysis for display layers

pub mod analysis;
pub mod constraint;
pub mod phase;
pub mod recording;
pub mod scope;
pub mod score;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use analysis::{ForbiddenTransition, HeadcountGap, OverlongRun, RestDeficit, RosterReport};
pub use constraint::ConstraintEvaluator;
pub use phase::{
    backfill::RestBackfill, construction::GreedyConstruction, fairness::FairnessSearch,
    support::SupportResolver, Phase, PhaseSummary, StopReason,
};
pub use recording::RecordingRoster;
pub use scope::{AttemptScope, ProblemIndex, SolverScope};
pub use score::RosterScorer;
pub use solver::{RosterSolver, SolveResult};
pub use statistics::{AttemptStatistics, PhaseStatistics, SolverStatistics, StatisticsCollector};
pub use termination::{ExternalTermination, OrTermination, Termination, TimeTermination};
