//! Shift kinds and roster cells.

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// A recurring duty type with its own daily headcount requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShiftKind {
    /// Day shift (`D`).
    Day,
    /// Evening shift (`E`).
    Evening,
    /// Night shift (`N`).
    Night,
    /// Float shift (`Fn`), usually weekday-only.
    Float,
}

impl ShiftKind {
    /// Number of shift kinds.
    pub const COUNT: usize = 4;

    /// All shift kinds in declaration order.
    pub const ALL: [ShiftKind; ShiftKind::COUNT] = [
        ShiftKind::Day,
        ShiftKind::Evening,
        ShiftKind::Night,
        ShiftKind::Float,
    ];

    /// Dense index for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ShiftKind::Day => 0,
            ShiftKind::Evening => 1,
            ShiftKind::Night => 2,
            ShiftKind::Float => 3,
        }
    }

    /// Short grid code.
    pub const fn code(self) -> &'static str {
        match self {
            ShiftKind::Day => "D",
            ShiftKind::Evening => "E",
            ShiftKind::Night => "N",
            ShiftKind::Float => "Fn",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ShiftKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "D" | "day" | "Day" => Ok(ShiftKind::Day),
            "E" | "evening" | "Evening" => Ok(ShiftKind::Evening),
            "N" | "night" | "Night" => Ok(ShiftKind::Night),
            "Fn" | "float" | "Float" => Ok(ShiftKind::Float),
            other => Err(RosterError::ParseShift(other.to_string())),
        }
    }
}

/// One cell of the roster grid: what a staff member does on one day.
///
/// `Rest` and `FixedRest` both count as rest days. `FixedRest` is a
/// pre-assigned day off that no generation stage may overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Cell {
    /// Not decided yet.
    #[default]
    Unassigned,
    /// Working the given shift.
    Work(ShiftKind),
    /// Rest day placed by the generator (`OFF`).
    Rest,
    /// Immovable pre-assigned rest day (`R`).
    FixedRest,
}

impl Cell {
    /// Returns true for `Unassigned`.
    #[inline]
    pub const fn is_unassigned(self) -> bool {
        matches!(self, Cell::Unassigned)
    }

    /// Returns true when the staff member works this day.
    #[inline]
    pub const fn is_working(self) -> bool {
        matches!(self, Cell::Work(_))
    }

    /// Returns true for either kind of rest.
    #[inline]
    pub const fn is_rest(self) -> bool {
        matches!(self, Cell::Rest | Cell::FixedRest)
    }

    /// Returns the worked shift, if any.
    #[inline]
    pub const fn shift(self) -> Option<ShiftKind> {
        match self {
            Cell::Work(shift) => Some(shift),
            _ => None,
        }
    }

    /// Grid code: `""`, a shift code, `OFF` or `R`.
    pub const fn code(self) -> &'static str {
        match self {
            Cell::Unassigned => "",
            Cell::Work(shift) => shift.code(),
            Cell::Rest => "OFF",
            Cell::FixedRest => "R",
        }
    }
}

impl From<ShiftKind> for Cell {
    fn from(shift: ShiftKind) -> Self {
        Cell::Work(shift)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Cell {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Cell::Unassigned),
            "OFF" => Ok(Cell::Rest),
            // Both pre-assigned leave markers of the ward grid are immovable.
            "R" | "公" => Ok(Cell::FixedRest),
            other => other.parse::<ShiftKind>().map(Cell::Work),
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.code().to_string()
    }
}
