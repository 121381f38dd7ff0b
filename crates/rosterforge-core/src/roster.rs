//! The roster grid.
//!
//! A [`Roster`] maps every staff member to one [`Cell`] per day of the
//! period. All rows share the period length; that invariant is checked
//! whenever rows are created or loaded.

use std::collections::HashMap;

use crate::error::{Result, RosterError};
use crate::shift::{Cell, ShiftKind};
use crate::staff::StaffId;

/// One staff member's row of the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterRow {
    /// Whose row this is.
    pub staff: StaffId,
    /// One cell per day.
    pub cells: Vec<Cell>,
}

impl RosterRow {
    pub fn new(staff: StaffId, cells: Vec<Cell>) -> Self {
        Self { staff, cells }
    }
}

/// Staff × day grid of assignments.
///
/// Rows are addressed either by [`StaffId`] (public lookups) or by their
/// dense row index (the solver's hot paths).
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Cell, Roster, ShiftKind, StaffId};
///
/// let mut roster = Roster::new([StaffId::new(1), StaffId::new(2)], 7).unwrap();
/// roster.assign(StaffId::new(1), 0, Cell::Work(ShiftKind::Night)).unwrap();
/// roster.pin_rest(StaffId::new(2), 0).unwrap();
///
/// assert_eq!(roster.headcount(0, ShiftKind::Night), 1);
/// assert_eq!(roster.rest_count(1), 1);
/// assert!(!roster.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<RosterRow>", into = "Vec<RosterRow>")
)]
pub struct Roster {
    days: usize,
    rows: Vec<RosterRow>,
    index: HashMap<StaffId, usize>,
}

impl Roster {
    /// Creates an empty roster (all cells `Unassigned`).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStaff` if a staff id is given twice.
    pub fn new(staff: impl IntoIterator<Item = StaffId>, days: usize) -> Result<Self> {
        let rows = staff
            .into_iter()
            .map(|id| RosterRow::new(id, vec![Cell::Unassigned; days]))
            .collect();
        Self::with_period(rows, days)
    }

    /// Builds a roster from explicit rows; the period is the first row's length.
    ///
    /// # Errors
    ///
    /// Returns `PeriodMismatch` for ragged rows and `DuplicateStaff` for
    /// repeated ids.
    pub fn from_rows(rows: Vec<RosterRow>) -> Result<Self> {
        let days = rows.first().map_or(0, |row| row.cells.len());
        Self::with_period(rows, days)
    }

    fn with_period(rows: Vec<RosterRow>, days: usize) -> Result<Self> {
        let mut index = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.cells.len() != days {
                return Err(RosterError::PeriodMismatch {
                    staff: row.staff,
                    expected: days,
                    actual: row.cells.len(),
                });
            }
            if index.insert(row.staff, i).is_some() {
                return Err(RosterError::DuplicateStaff(row.staff));
            }
        }
        Ok(Self { days, rows, index })
    }

    /// Number of days in the period.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of staff rows.
    #[inline]
    pub fn staff_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Staff ids in row order.
    pub fn staff(&self) -> impl Iterator<Item = StaffId> + '_ {
        self.rows.iter().map(|row| row.staff)
    }

    /// Staff id of a row index.
    ///
    /// # Panics
    ///
    /// Panics if `staff` is not below `staff_count()`.
    #[inline]
    pub fn staff_id(&self, staff: usize) -> StaffId {
        self.rows[staff].staff
    }

    /// Row index of a staff id.
    #[inline]
    pub fn index_of(&self, staff: StaffId) -> Option<usize> {
        self.index.get(&staff).copied()
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    /// Cells of a row index.
    ///
    /// # Panics
    ///
    /// Panics if `staff` is not below `staff_count()`.
    #[inline]
    pub fn row(&self, staff: usize) -> &[Cell] {
        &self.rows[staff].cells
    }

    /// Cells of a staff id.
    pub fn row_of(&self, staff: StaffId) -> Option<&[Cell]> {
        self.index_of(staff).map(|i| self.row(i))
    }

    /// Cell at (row index, day).
    ///
    /// # Panics
    ///
    /// Panics if `staff` or `day` is out of range.
    #[inline]
    pub fn cell(&self, staff: usize, day: usize) -> Cell {
        self.rows[staff].cells[day]
    }

    /// Overwrites a cell by row index, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `staff` or `day` is out of range. Use [`Roster::assign`]
    /// for checked access by staff id.
    #[inline]
    pub fn set_cell(&mut self, staff: usize, day: usize, cell: Cell) -> Cell {
        std::mem::replace(&mut self.rows[staff].cells[day], cell)
    }

    /// Overwrites a cell by staff id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStaff` or `InvalidParameter` for an out-of-period day.
    pub fn assign(&mut self, staff: StaffId, day: usize, cell: Cell) -> Result<Cell> {
        let i = self
            .index_of(staff)
            .ok_or(RosterError::UnknownStaff(staff))?;
        if day >= self.days {
            return Err(RosterError::InvalidParameter(format!(
                "day {day} is outside the {}-day period",
                self.days
            )));
        }
        Ok(self.set_cell(i, day, cell))
    }

    /// Marks a pre-assigned, immovable rest day.
    pub fn pin_rest(&mut self, staff: StaffId, day: usize) -> Result<()> {
        self.assign(staff, day, Cell::FixedRest).map(|_| ())
    }

    /// Number of staff working `shift` on `day`.
    pub fn headcount(&self, day: usize, shift: ShiftKind) -> u32 {
        self.rows
            .iter()
            .filter(|row| row.cells[day] == Cell::Work(shift))
            .count() as u32
    }

    /// Rest days (both kinds) of a row index.
    pub fn rest_count(&self, staff: usize) -> u32 {
        self.row(staff).iter().filter(|c| c.is_rest()).count() as u32
    }

    /// Working days of a row index.
    pub fn work_count(&self, staff: usize) -> u32 {
        self.row(staff).iter().filter(|c| c.is_working()).count() as u32
    }

    /// Rest counts for every row, in row order.
    pub fn rest_counts(&self) -> Vec<u32> {
        (0..self.staff_count()).map(|i| self.rest_count(i)).collect()
    }

    /// Derived working-day counts of a row index.
    pub fn tally(&self, staff: usize) -> StaffTally {
        StaffTally::of(self.row(staff))
    }

    /// Returns true when no cell is `Unassigned`.
    pub fn is_complete(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells.iter().all(|c| !c.is_unassigned()))
    }
}

impl TryFrom<Vec<RosterRow>> for Roster {
    type Error = RosterError;

    fn try_from(rows: Vec<RosterRow>) -> Result<Self> {
        Roster::from_rows(rows)
    }
}

impl From<Roster> for Vec<RosterRow> {
    fn from(roster: Roster) -> Self {
        roster.rows
    }
}

/// Per-staff counts derived from a roster row.
///
/// Never stored alongside the roster; recompute it whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaffTally {
    per_shift: [u32; ShiftKind::COUNT],
    working: u32,
    rest: u32,
    unassigned: u32,
}

impl StaffTally {
    /// Counts a row of cells.
    pub fn of(cells: &[Cell]) -> Self {
        let mut tally = StaffTally::default();
        for cell in cells {
            match cell {
                Cell::Work(shift) => {
                    tally.per_shift[shift.index()] += 1;
                    tally.working += 1;
                }
                Cell::Rest | Cell::FixedRest => tally.rest += 1,
                Cell::Unassigned => tally.unassigned += 1,
            }
        }
        tally
    }

    /// Days worked on `shift`.
    #[inline]
    pub fn count(&self, shift: ShiftKind) -> u32 {
        self.per_shift[shift.index()]
    }

    #[inline]
    pub fn working(&self) -> u32 {
        self.working
    }

    #[inline]
    pub fn rest(&self) -> u32 {
        self.rest
    }

    #[inline]
    pub fn unassigned(&self) -> u32 {
        self.unassigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u32) -> Vec<StaffId> {
        (0..n).map(StaffId::new).collect()
    }

    #[test]
    fn test_new_roster_is_empty_grid() {
        let roster = Roster::new(ids(3), 5).unwrap();
        assert_eq!(roster.staff_count(), 3);
        assert_eq!(roster.days(), 5);
        assert!(roster
            .rows()
            .iter()
            .all(|r| r.cells.iter().all(|c| c.is_unassigned())));
        assert!(!roster.is_complete());
    }

    #[test]
    fn test_duplicate_staff_rejected() {
        let err = Roster::new([StaffId::new(1), StaffId::new(1)], 3).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateStaff(id) if id == StaffId::new(1)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![
            RosterRow::new(StaffId::new(0), vec![Cell::Unassigned; 4]),
            RosterRow::new(StaffId::new(1), vec![Cell::Unassigned; 3]),
        ];
        let err = Roster::from_rows(rows).unwrap_err();
        assert!(matches!(
            err,
            RosterError::PeriodMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_assign_by_id() {
        let mut roster = Roster::new(ids(2), 3).unwrap();
        let previous = roster
            .assign(StaffId::new(1), 2, Cell::Work(ShiftKind::Day))
            .unwrap();
        assert_eq!(previous, Cell::Unassigned);
        assert_eq!(roster.cell(1, 2), Cell::Work(ShiftKind::Day));
        assert!(roster.assign(StaffId::new(9), 0, Cell::Rest).is_err());
        assert!(roster.assign(StaffId::new(0), 3, Cell::Rest).is_err());
    }

    #[test]
    #[should_panic]
    fn test_cell_out_of_range_panics() {
        let roster = Roster::new(ids(2), 3).unwrap();
        roster.cell(0, 3);
    }

    #[test]
    #[should_panic]
    fn test_set_cell_unknown_row_panics() {
        let mut roster = Roster::new(ids(2), 3).unwrap();
        roster.set_cell(2, 0, Cell::Rest);
    }

    #[test]
    fn test_tally_counts() {
        let cells = [
            Cell::Work(ShiftKind::Day),
            Cell::Work(ShiftKind::Night),
            Cell::Work(ShiftKind::Night),
            Cell::Rest,
            Cell::FixedRest,
            Cell::Unassigned,
        ];
        let tally = StaffTally::of(&cells);
        assert_eq!(tally.count(ShiftKind::Night), 2);
        assert_eq!(tally.count(ShiftKind::Day), 1);
        assert_eq!(tally.working(), 3);
        assert_eq!(tally.rest(), 2);
        assert_eq!(tally.unassigned(), 1);
    }

    #[test]
    fn test_headcount_and_rest_counts() {
        let mut roster = Roster::new(ids(3), 2).unwrap();
        roster.set_cell(0, 0, Cell::Work(ShiftKind::Evening));
        roster.set_cell(1, 0, Cell::Work(ShiftKind::Evening));
        roster.set_cell(2, 0, Cell::Rest);
        roster.set_cell(2, 1, Cell::FixedRest);

        assert_eq!(roster.headcount(0, ShiftKind::Evening), 2);
        assert_eq!(roster.headcount(1, ShiftKind::Evening), 0);
        assert_eq!(roster.rest_counts(), vec![0, 0, 2]);
        assert_eq!(roster.work_count(0), 1);
    }
}
