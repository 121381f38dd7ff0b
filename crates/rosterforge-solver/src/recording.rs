//! Roster wrapper that records cell writes for undo.
//!
//! Phases write a tentative change through the [`RecordingRoster`], check
//! it with the constraint evaluator, then either keep it with
//! [`commit`](RecordingRoster::commit) or restore every touched cell with
//! [`undo_changes`](RecordingRoster::undo_changes):
//!
//! ```text
//! let mut recording = RecordingRoster::new(&mut roster);
//! recording.set(staff, day, Cell::Work(shift));
//! if evaluator.is_cell_legal(recording.roster(), staff, day) {
//!     recording.commit();
//! } else {
//!     recording.undo_changes();
//! }
//! ```

use rosterforge_core::{Cell, Roster};
use smallvec::SmallVec;

/// A roster wrapper that stores the previous value of every written cell.
///
/// Chains touch at most three cells, so the log stays inline.
///
/// # Example
///
/// ```
/// use rosterforge_core::{Cell, Roster, ShiftKind, StaffId};
/// use rosterforge_solver::RecordingRoster;
///
/// let mut roster = Roster::new([StaffId::new(0)], 2).unwrap();
/// let mut recording = RecordingRoster::new(&mut roster);
///
/// recording.set(0, 0, Cell::Work(ShiftKind::Day));
/// recording.set(0, 1, Cell::Rest);
/// assert_eq!(recording.change_count(), 2);
///
/// recording.undo_changes();
/// assert!(recording.roster().row(0).iter().all(|c| c.is_unassigned()));
/// ```
pub struct RecordingRoster<'a> {
    roster: &'a mut Roster,
    undo_log: SmallVec<[(usize, usize, Cell); 4]>,
}

impl<'a> RecordingRoster<'a> {
    pub fn new(roster: &'a mut Roster) -> Self {
        Self {
            roster,
            undo_log: SmallVec::new(),
        }
    }

    /// Writes a cell and records its previous value.
    pub fn set(&mut self, staff: usize, day: usize, cell: Cell) {
        let previous = self.roster.set_cell(staff, day, cell);
        self.undo_log.push((staff, day, previous));
    }

    /// Restores all recorded cells in reverse order.
    pub fn undo_changes(&mut self) {
        while let Some((staff, day, previous)) = self.undo_log.pop() {
            self.roster.set_cell(staff, day, previous);
        }
    }

    /// Keeps the recorded changes and clears the log.
    pub fn commit(&mut self) {
        self.undo_log.clear();
    }

    pub fn roster(&self) -> &Roster {
        self.roster
    }

    /// Returns the number of recorded writes.
    pub fn change_count(&self) -> usize {
        self.undo_log.len()
    }

    /// Returns true if there are no recorded writes.
    pub fn is_empty(&self) -> bool {
        self.undo_log.is_empty()
    }
}
