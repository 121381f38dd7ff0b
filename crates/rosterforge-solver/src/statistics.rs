//! Solver statistics collection and reporting.
//!
//! Tracks attempts, committed steps, per-phase outcomes and the score of
//! every finished attempt.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rosterforge_core::RosterScore;

use crate::phase::{PhaseSummary, StopReason};

/// Statistics for one phase of one attempt.
#[derive(Debug, Clone)]
pub struct PhaseStatistics {
    /// Type name of the phase (e.g., "GreedyConstruction").
    pub phase_type: &'static str,
    /// Time spent in this phase.
    pub duration: Duration,
    /// Number of committed steps.
    pub step_count: u64,
    /// Why the phase stopped.
    pub stop: StopReason,
}

impl PhaseStatistics {
    pub fn new(phase_type: &'static str, duration: Duration, summary: PhaseSummary) -> Self {
        Self {
            phase_type,
            duration,
            step_count: summary.steps,
            stop: summary.stop,
        }
    }
}

/// Statistics for one generation attempt.
#[derive(Debug, Clone)]
pub struct AttemptStatistics {
    /// Index of this attempt (0-based).
    pub attempt: usize,
    /// Time spent in this attempt.
    pub duration: Duration,
    /// Score of the attempt's roster.
    pub score: RosterScore,
    /// Statistics for each phase, in execution order.
    pub phases: Vec<PhaseStatistics>,
}

impl AttemptStatistics {
    /// Total committed steps across all phases.
    pub fn step_count(&self) -> u64 {
        self.phases.iter().map(|p| p.step_count).sum()
    }
}

/// Complete statistics for a solver run.
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Attempts that ran to completion.
    pub attempts_completed: u64,
    /// Attempts skipped because a termination fired.
    pub attempts_skipped: u64,
    /// Total committed steps across all attempts.
    pub total_step_count: u64,
    /// Index of the attempt whose roster was returned.
    pub best_attempt: Option<usize>,
    /// Per-attempt statistics, ordered by attempt index.
    pub attempts: Vec<AttemptStatistics>,
}

impl SolverStatistics {
    /// Returns the number of finished attempts.
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Score of the first attempt, if it finished.
    pub fn first_score(&self) -> Option<RosterScore> {
        self.attempts
            .iter()
            .find(|a| a.attempt == 0)
            .map(|a| a.score)
    }

    /// Best score over all finished attempts.
    pub fn best_score(&self) -> Option<RosterScore> {
        self.attempts.iter().map(|a| a.score).min()
    }
}

/// Thread-safe collector for solver statistics.
///
/// Attempts report into it from worker threads. After solving, call
/// `into_statistics()` to get the final `SolverStatistics`.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    attempts_completed: AtomicU64,
    attempts_skipped: AtomicU64,
    step_count: AtomicU64,
    attempts: Mutex<Vec<AttemptStatistics>>,
}

impl StatisticsCollector {
    /// Creates a new statistics collector.
    ///
    /// The start time is recorded when this is called.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            attempts_completed: AtomicU64::new(0),
            attempts_skipped: AtomicU64::new(0),
            step_count: AtomicU64::new(0),
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Records a finished attempt.
    pub fn record_attempt(&self, stats: AttemptStatistics) {
        self.attempts_completed.fetch_add(1, Ordering::Relaxed);
        self.step_count
            .fetch_add(stats.step_count(), Ordering::Relaxed);
        if let Ok(mut attempts) = self.attempts.lock() {
            attempts.push(stats);
        }
    }

    /// Records an attempt that never started.
    pub fn record_skipped(&self) {
        self.attempts_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current number of finished attempts.
    pub fn current_attempts_completed(&self) -> u64 {
        self.attempts_completed.load(Ordering::Relaxed)
    }

    /// Returns the current committed step count.
    pub fn current_step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    /// Converts this collector into final statistics.
    pub fn into_statistics(self, best_attempt: Option<usize>) -> SolverStatistics {
        let mut attempts = self
            .attempts
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attempts.sort_by_key(|a| a.attempt);

        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            attempts_completed: self.attempts_completed.load(Ordering::Relaxed),
            attempts_skipped: self.attempts_skipped.load(Ordering::Relaxed),
            total_step_count: self.step_count.load(Ordering::Relaxed),
            best_attempt,
            attempts,
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
