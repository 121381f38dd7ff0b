//! Shift rule tables: construction priority, weekday-only shifts and
//! forbidden shift-to-shift transitions.

use std::collections::BTreeSet;

use crate::shift::{Cell, ShiftKind};

/// One ordered pair of shifts on consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: ShiftKind,
    pub to: ShiftKind,
}

impl Transition {
    pub const fn new(from: ShiftKind, to: ShiftKind) -> Self {
        Self { from, to }
    }
}

/// Table of forbidden (yesterday, today) shift pairs.
///
/// Stored as a dense matrix for O(1) lookups; serialized as a list of pairs.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{ShiftKind, TransitionTable};
///
/// let table = TransitionTable::default();
/// assert!(table.is_forbidden(ShiftKind::Night, ShiftKind::Day));
/// assert!(!table.is_forbidden(ShiftKind::Day, ShiftKind::Night));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Transition>", into = "Vec<Transition>")
)]
pub struct TransitionTable {
    forbidden: [[bool; ShiftKind::COUNT]; ShiftKind::COUNT],
}

impl TransitionTable {
    /// A table that forbids nothing.
    pub const fn empty() -> Self {
        Self {
            forbidden: [[false; ShiftKind::COUNT]; ShiftKind::COUNT],
        }
    }

    /// Forbids `from` immediately followed by `to`.
    pub fn forbid(mut self, from: ShiftKind, to: ShiftKind) -> Self {
        self.forbidden[from.index()][to.index()] = true;
        self
    }

    #[inline]
    pub fn is_forbidden(&self, from: ShiftKind, to: ShiftKind) -> bool {
        self.forbidden[from.index()][to.index()]
    }

    /// Whether `before` followed by `after` breaks the table. Anything
    /// involving a non-working cell is allowed.
    #[inline]
    pub fn forbids(&self, before: Cell, after: Cell) -> bool {
        match (before.shift(), after.shift()) {
            (Some(from), Some(to)) => self.is_forbidden(from, to),
            _ => false,
        }
    }

    /// Forbidden pairs in (from, to) order.
    pub fn transitions(&self) -> Vec<Transition> {
        let mut out = Vec::new();
        for from in ShiftKind::ALL {
            for to in ShiftKind::ALL {
                if self.is_forbidden(from, to) {
                    out.push(Transition::new(from, to));
                }
            }
        }
        out
    }
}

impl Default for TransitionTable {
    /// Night may not be followed by Day, Evening or Float; Evening and
    /// Float may not be followed by Day.
    fn default() -> Self {
        use ShiftKind::*;
        Self::empty()
            .forbid(Night, Day)
            .forbid(Night, Evening)
            .forbid(Night, Float)
            .forbid(Evening, Day)
            .forbid(Float, Day)
    }
}

impl From<Vec<Transition>> for TransitionTable {
    fn from(pairs: Vec<Transition>) -> Self {
        pairs
            .into_iter()
            .fold(Self::empty(), |table, t| table.forbid(t.from, t.to))
    }
}

impl From<TransitionTable> for Vec<Transition> {
    fn from(table: TransitionTable) -> Self {
        table.transitions()
    }
}

/// Data tables that drive construction and legality checks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct ShiftRules {
    /// Order in which shifts are staffed each day, hardest first.
    pub priority: Vec<ShiftKind>,
    /// Shifts that are only staffed on weekdays.
    pub weekday_only: BTreeSet<ShiftKind>,
    /// Forbidden consecutive-day transitions.
    pub forbidden: TransitionTable,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            priority: vec![
                ShiftKind::Float,
                ShiftKind::Night,
                ShiftKind::Evening,
                ShiftKind::Day,
            ],
            weekday_only: BTreeSet::from([ShiftKind::Float]),
            forbidden: TransitionTable::default(),
        }
    }
}

impl ShiftRules {
    #[inline]
    pub fn is_weekday_only(&self, shift: ShiftKind) -> bool {
        self.weekday_only.contains(&shift)
    }

    pub fn with_forbidden(mut self, forbidden: TransitionTable) -> Self {
        self.forbidden = forbidden;
        self
    }

    pub fn with_priority(mut self, priority: Vec<ShiftKind>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_weekday_only(mut self, shifts: impl IntoIterator<Item = ShiftKind>) -> Self {
        self.weekday_only = shifts.into_iter().collect();
        self
    }
}
