//! Multi-restart roster solver.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;
use rosterforge_config::{RosterConfig, ThreadCount};
use rosterforge_core::{Result, Roster, RosterError, RosterProblem, RosterScore};
use tracing::{debug, info, trace};

use crate::analysis::RosterReport;
use crate::constraint::ConstraintEvaluator;
use crate::phase::backfill::RestBackfill;
use crate::phase::construction::GreedyConstruction;
use crate::phase::fairness::FairnessSearch;
use crate::phase::support::SupportResolver;
use crate::phase::Phase;
use crate::scope::{AttemptScope, ProblemIndex, SolverScope};
use crate::score::RosterScorer;
use crate::statistics::{AttemptStatistics, PhaseStatistics, SolverStatistics, StatisticsCollector};
use crate::termination::{ExternalTermination, OrTermination, Termination, TimeTermination};

/// Result of a solve: the best roster found, its score and run statistics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Every cell resolved; never `Unassigned`.
    pub roster: Roster,
    pub score: RosterScore,
    pub statistics: SolverStatistics,
}

impl SolveResult {
    /// Quality report of the returned roster.
    pub fn report(&self, problem: &RosterProblem) -> RosterReport {
        RosterReport::analyze(problem, &self.roster)
    }
}

struct AttemptOutcome {
    attempt: usize,
    roster: Roster,
    score: RosterScore,
}

/// Runs the generation pipeline `restart_count` times and keeps the best roster.
///
/// Each attempt starts from a fresh clone of the caller's skeleton and runs
/// construction, backfill, support and fairness in order. Attempts are
/// independent and run on rayon according to `thread_count`. The lowest
/// score wins; ties go to the lowest attempt index, so a seeded run returns
/// the same roster however many threads it uses.
///
/// # Example
///
/// ```
/// use rosterforge_config::{RosterConfig, ThreadCount};
/// use rosterforge_core::{Calendar, Eligibility, Roster, RosterParameters,
///     RosterProblem, ShiftDemand, ShiftKind, StaffId};
/// use rosterforge_solver::RosterSolver;
///
/// let staff: Vec<StaffId> = (0..6).map(StaffId::new).collect();
/// let problem = RosterProblem::new(
///     Roster::new(staff.clone(), 7).unwrap(),
///     Calendar::all_weekdays(7),
///     Eligibility::new().with(ShiftKind::Day, staff),
///     RosterParameters::new(ShiftDemand::new(2, 0, 0, 0)).with_min_rest_days(2),
/// );
///
/// let config = RosterConfig::new()
///     .with_random_seed(42)
///     .with_restart_count(4)
///     .with_thread_count(ThreadCount::None);
/// let result = RosterSolver::new(config).solve(&problem).unwrap();
///
/// assert!(result.roster.is_complete());
/// assert!(result.score.is_fully_staffed());
/// ```
#[derive(Debug)]
pub struct RosterSolver {
    config: RosterConfig,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
}

impl RosterSolver {
    pub fn new(config: RosterConfig) -> Self {
        Self {
            config,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Requests early termination of the solving process.
    ///
    /// This method is thread-safe and can be called from another thread.
    /// Attempts already running finish; no new attempt starts. Returns
    /// false when nothing is being solved.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Generates a roster for `problem`.
    ///
    /// # Errors
    ///
    /// Returns the problem's validation error, `Internal` when a dedicated
    /// thread pool cannot be built, or `Internal` when `full_assert` mode
    /// finds a broken invariant.
    pub fn solve(&self, problem: &RosterProblem) -> Result<SolveResult> {
        problem.validate()?;

        self.terminate_early_flag.store(false, Ordering::SeqCst);
        let _solving = SolvingGuard::start(&self.solving);

        let base_seed = self
            .config
            .effective_seed()
            .unwrap_or_else(|| rand::rng().random());
        let restart_count = self.config.restart_count.max(1);
        let index = ProblemIndex::new(problem);
        let scorer = RosterScorer::new(self.config.shortage_weight);
        let solver_scope = SolverScope::new();
        let collector = StatisticsCollector::new();
        let termination = OrTermination((
            self.config.time_limit().map(TimeTermination::new),
            ExternalTermination::new(&self.terminate_early_flag),
        ));

        info!(
            event = "solve_start",
            staff_count = problem.staff_count(),
            day_count = problem.days(),
            restart_count,
            seed = base_seed,
        );

        let run = |attempt: usize| -> Option<Result<AttemptOutcome>> {
            if attempt > 0 && termination.is_terminated(&solver_scope) {
                collector.record_skipped();
                return None;
            }
            Some(self.run_attempt(&index, &scorer, &solver_scope, &collector, attempt, base_seed))
        };

        let outcomes: Vec<Option<Result<AttemptOutcome>>> = match self.config.thread_count {
            ThreadCount::None => (0..restart_count).map(run).collect(),
            ThreadCount::Auto => (0..restart_count).into_par_iter().map(run).collect(),
            ThreadCount::Count(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| RosterError::Internal(format!("cannot build thread pool: {e}")))?;
                pool.install(|| (0..restart_count).into_par_iter().map(run).collect())
            }
        };

        // Outcomes are in attempt order, so a strict comparison keeps the
        // lowest index among equal scores.
        let mut best: Option<AttemptOutcome> = None;
        for outcome in outcomes.into_iter().flatten() {
            let outcome = outcome?;
            if best.as_ref().map_or(true, |b| outcome.score < b.score) {
                best = Some(outcome);
            }
        }
        let Some(best) = best else {
            return Err(RosterError::Internal("no attempt finished".to_string()));
        };

        let statistics = collector.into_statistics(Some(best.attempt));
        if statistics.attempts_skipped > 0 {
            info!(
                event = "terminated",
                attempts_completed = statistics.attempts_completed,
                attempts_skipped = statistics.attempts_skipped,
            );
        }
        info!(
            event = "solve_end",
            score = %best.score,
            shortage = best.score.shortage(),
            attempts = statistics.attempts_completed,
            best_attempt = best.attempt,
            duration_ms = statistics.total_duration.as_millis() as u64,
        );

        Ok(SolveResult {
            roster: best.roster,
            score: best.score,
            statistics,
        })
    }

    fn run_attempt(
        &self,
        index: &ProblemIndex<'_>,
        scorer: &RosterScorer,
        solver_scope: &SolverScope,
        collector: &StatisticsCollector,
        attempt: usize,
        base_seed: u64,
    ) -> Result<AttemptOutcome> {
        let mut scope = AttemptScope::new(index, attempt, base_seed);
        let mut phases = Vec::with_capacity(4);

        run_phase(&mut GreedyConstruction::new(), &mut scope, &mut phases);
        run_phase(&mut RestBackfill::new(), &mut scope, &mut phases);
        run_phase(
            &mut SupportResolver::from_config(&self.config.support),
            &mut scope,
            &mut phases,
        );
        run_phase(
            &mut FairnessSearch::from_config(&self.config.fairness),
            &mut scope,
            &mut phases,
        );

        let duration = scope.elapsed();
        let roster = scope.into_roster();
        if self.config.environment_mode.is_asserted() {
            verify_attempt(index, &roster, attempt)?;
        }

        let score = scorer.score(index.problem(), &roster);
        debug!(
            event = "attempt_end",
            attempt,
            shortage = score.shortage(),
            variance = score.rest_variance(),
            score = %score,
        );

        solver_scope.record_attempt();
        collector.record_attempt(AttemptStatistics {
            attempt,
            duration,
            score,
            phases,
        });
        Ok(AttemptOutcome {
            attempt,
            roster,
            score,
        })
    }
}

impl Default for RosterSolver {
    fn default() -> Self {
        Self::new(RosterConfig::default())
    }
}

fn run_phase<P: Phase>(
    phase: &mut P,
    scope: &mut AttemptScope<'_>,
    phases: &mut Vec<PhaseStatistics>,
) {
    let start = Instant::now();
    let summary = phase.solve(scope);
    let duration = start.elapsed();

    trace!(
        event = "phase_end",
        attempt = scope.attempt(),
        phase = phase.phase_type_name(),
        steps = summary.steps,
        stop = %summary.stop,
        duration_ms = duration.as_millis() as u64,
    );
    phases.push(PhaseStatistics::new(phase.phase_type_name(), duration, summary));
}

/// Checks the invariants every attempt must hold in `full_assert` mode.
fn verify_attempt(index: &ProblemIndex<'_>, roster: &Roster, attempt: usize) -> Result<()> {
    let problem = index.problem();
    let skeleton = &problem.roster;
    if roster.days() != index.days() || roster.staff_count() != index.staff_count() {
        return Err(RosterError::Internal(format!(
            "attempt {attempt} changed the roster shape"
        )));
    }

    let evaluator = ConstraintEvaluator::for_problem(problem);
    for staff in 0..roster.staff_count() {
        for day in 0..roster.days() {
            let cell = roster.cell(staff, day);
            if index.is_pinned(staff, day) {
                if cell != skeleton.cell(staff, day) {
                    return Err(RosterError::Internal(format!(
                        "attempt {attempt} overwrote pinned cell of {} on day {day}",
                        roster.staff_id(staff)
                    )));
                }
            } else if cell.is_unassigned() {
                return Err(RosterError::Internal(format!(
                    "attempt {attempt} left {} unassigned on day {day}",
                    roster.staff_id(staff)
                )));
            } else if !evaluator.is_cell_legal(roster, staff, day) {
                return Err(RosterError::Internal(format!(
                    "attempt {attempt} placed an illegal {cell} for {} on day {day}",
                    roster.staff_id(staff)
                )));
            }
        }
    }
    Ok(())
}

struct SolvingGuard<'a>(&'a AtomicBool);

impl<'a> SolvingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for SolvingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
