//! Termination conditions for the restart loop.
//!
//! Conditions are checked before every attempt except the first, so a
//! solve always produces at least one roster.

mod composite;
mod external;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop starting new attempts.
///
/// Shared by reference across worker threads, hence `Sync`.
pub trait Termination: Send + Sync + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(solver_scope))
    }
}

#[cfg(test)]
mod tests;
