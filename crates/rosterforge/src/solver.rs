//! Generator entry points that hide all engine wiring.

use rosterforge_config::RosterConfig;
use rosterforge_core::{Result, RosterProblem};
use rosterforge_solver::{RosterSolver, SolveResult};
use tracing::debug;

/// Configuration file read by [`generate`] from the working directory.
pub const CONFIG_FILE: &str = "roster.toml";

/// Generates a roster using `roster.toml` when present, else defaults.
///
/// A config file that exists but fails to parse falls back to defaults too.
///
/// # Errors
///
/// Returns an error when the problem is malformed (see
/// [`RosterProblem::validate`]).
pub fn generate(problem: &RosterProblem) -> Result<SolveResult> {
    let config = match RosterConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            debug!(event = "config_default", file = CONFIG_FILE, reason = %err);
            RosterConfig::default()
        }
    };
    generate_with_config(problem, config)
}

/// Generates a roster with an explicit configuration.
///
/// Parameter and rule overrides from `config` are applied to a copy of
/// `problem`; the caller's problem is left untouched.
pub fn generate_with_config(problem: &RosterProblem, config: RosterConfig) -> Result<SolveResult> {
    #[cfg(feature = "console")]
    rosterforge_console::init();

    config.validate()?;
    let solver = RosterSolver::new(config);
    if solver.config().parameters.is_none() && solver.config().rules.is_none() {
        return solver.solve(problem);
    }

    let mut problem = problem.clone();
    solver.config().apply_to(&mut problem);
    solver.solve(&problem)
}
