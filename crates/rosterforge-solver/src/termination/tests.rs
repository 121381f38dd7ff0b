//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::*;

#[test]
fn test_time_termination() {
    let scope = SolverScope::new();
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
    assert!(!TimeTermination::seconds(3600).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let flag = AtomicBool::new(false);
    let term = ExternalTermination::new(&flag);
    let scope = SolverScope::new();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let flag = AtomicBool::new(false);
    let scope = SolverScope::new();
    let term = OrTermination((
        TimeTermination::seconds(3600),
        ExternalTermination::new(&flag),
    ));

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_optional_termination() {
    let scope = SolverScope::new();
    let none: Option<TimeTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(TimeTermination::millis(0)).is_terminated(&scope));
}
