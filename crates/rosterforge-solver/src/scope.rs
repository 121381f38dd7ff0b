//! Solver-level and attempt-level scopes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rosterforge_core::{Roster, RosterProblem, ShiftKind};

/// Top-level scope shared by all attempts of one solve.
///
/// Only atomics are mutated, so attempts on different threads share it
/// by reference.
#[derive(Debug)]
pub struct SolverScope {
    start_time: Instant,
    attempts_completed: AtomicU64,
}

impl SolverScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            attempts_completed: AtomicU64::new(0),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn attempts_completed(&self) -> u64 {
        self.attempts_completed.load(Ordering::Relaxed)
    }

    pub fn record_attempt(&self) {
        self.attempts_completed.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for SolverScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookups derived once per solve from the caller's problem.
///
/// Holds the pin mask (every non-empty skeleton cell) and a dense
/// staff × shift eligibility matrix.
#[derive(Debug)]
pub struct ProblemIndex<'p> {
    problem: &'p RosterProblem,
    pinned: Vec<bool>,
    eligible: Vec<[bool; ShiftKind::COUNT]>,
}

impl<'p> ProblemIndex<'p> {
    pub fn new(problem: &'p RosterProblem) -> Self {
        let skeleton = &problem.roster;
        let pinned = skeleton
            .rows()
            .iter()
            .flat_map(|row| row.cells.iter().map(|c| !c.is_unassigned()))
            .collect();
        let eligible = skeleton
            .staff()
            .map(|id| ShiftKind::ALL.map(|shift| problem.eligibility.is_eligible(shift, id)))
            .collect();
        Self {
            problem,
            pinned,
            eligible,
        }
    }

    #[inline]
    pub fn problem(&self) -> &'p RosterProblem {
        self.problem
    }

    #[inline]
    pub fn days(&self) -> usize {
        self.problem.roster.days()
    }

    #[inline]
    pub fn staff_count(&self) -> usize {
        self.eligible.len()
    }

    /// Whether the caller fixed this cell in the skeleton.
    #[inline]
    pub fn is_pinned(&self, staff: usize, day: usize) -> bool {
        self.pinned[staff * self.days() + day]
    }

    #[inline]
    pub fn is_eligible(&self, staff: usize, shift: ShiftKind) -> bool {
        self.eligible[staff][shift.index()]
    }

    /// Row indices of everyone eligible for `shift`.
    pub fn pool(&self, shift: ShiftKind) -> Vec<usize> {
        (0..self.staff_count())
            .filter(|&staff| self.is_eligible(staff, shift))
            .collect()
    }
}

/// Working state of one generation attempt.
///
/// Each attempt owns a fresh clone of the skeleton. A `ChaCha8Rng` seeded
/// from the run's base seed on stream `attempt` shuffles a per-staff rank
/// that is used only to break ties.
pub struct AttemptScope<'a> {
    index: &'a ProblemIndex<'a>,
    roster: Roster,
    tie_rank: Vec<usize>,
    attempt: usize,
    start_time: Instant,
}

impl<'a> AttemptScope<'a> {
    pub fn new(index: &'a ProblemIndex<'a>, attempt: usize, base_seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        rng.set_stream(attempt as u64);

        let mut order: Vec<usize> = (0..index.staff_count()).collect();
        order.shuffle(&mut rng);
        let mut tie_rank = vec![0; order.len()];
        for (rank, staff) in order.into_iter().enumerate() {
            tie_rank[staff] = rank;
        }

        Self {
            index,
            roster: index.problem().roster.clone(),
            tie_rank,
            attempt,
            start_time: Instant::now(),
        }
    }

    /// Shared lookups; the returned reference does not borrow the scope.
    #[inline]
    pub fn index(&self) -> &'a ProblemIndex<'a> {
        self.index
    }

    #[inline]
    pub fn problem(&self) -> &'a RosterProblem {
        self.index.problem()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Position of `staff` in this attempt's shuffled order.
    #[inline]
    pub fn tie_rank(&self, staff: usize) -> usize {
        self.tie_rank[staff]
    }

    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
