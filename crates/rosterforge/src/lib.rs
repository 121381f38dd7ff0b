//! RosterForge - A Shift Roster Generator in Rust
//!
//! Describe the ward once and call [`generate`].
//!
//! # Example
//!
//! ```rust
//! use rosterforge::prelude::*;
//!
//! let staff: Vec<StaffId> = (0..8).map(StaffId::new).collect();
//! let problem = RosterProblem::new(
//!     Roster::new(staff.clone(), 14).unwrap(),
//!     Calendar::all_weekdays(14),
//!     Eligibility::new()
//!         .with(ShiftKind::Day, staff.clone())
//!         .with(ShiftKind::Night, staff),
//!     RosterParameters::new(ShiftDemand::new(2, 0, 1, 0)).with_min_rest_days(4),
//! );
//!
//! let config = RosterConfig::new().with_random_seed(1).with_restart_count(4);
//! let result = generate_with_config(&problem, config).unwrap();
//! assert!(result.roster.is_complete());
//! ```

// Domain types
pub use rosterforge_core::{
    Calendar, Cell, Eligibility, Result, Roster, RosterError, RosterParameters, RosterProblem,
    RosterRow, RosterScore, ShiftDemand, ShiftKind, ShiftRules, StaffId, StaffTally, Transition,
    TransitionTable,
};

// Configuration
pub use rosterforge_config::{
    ConfigError, EnvironmentMode, FairnessConfig, RosterConfig, SupportConfig, TerminationConfig,
    ThreadCount,
};

// Engine and reports
pub use rosterforge_solver::{
    ForbiddenTransition, HeadcountGap, OverlongRun, RestDeficit, RosterReport, RosterSolver,
    SolveResult, SolverStatistics,
};

/// Phase-level building blocks for callers composing their own pipeline.
pub mod engine {
    pub use rosterforge_solver::{
        phase, AttemptScope, ConstraintEvaluator, FairnessSearch, GreedyConstruction, Phase,
        PhaseSummary, ProblemIndex, RecordingRoster, RestBackfill, RosterScorer, StopReason,
        SupportResolver,
    };
}

#[cfg(feature = "console")]
pub use rosterforge_console as console;

mod solver;
pub use solver::{generate, generate_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{generate, generate_with_config};
    pub use super::{
        Calendar, Cell, Eligibility, Roster, RosterParameters, RosterProblem, ShiftDemand,
        ShiftKind, ShiftRules, StaffId,
    };
    pub use super::{RosterConfig, RosterReport, RosterScore, SolveResult, ThreadCount};
}
