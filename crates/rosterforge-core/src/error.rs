//! Error types for RosterForge

use thiserror::Error;

use crate::staff::StaffId;

/// Main error type for RosterForge operations.
///
/// Infeasible staffing is not an error: a roster that cannot meet demand
/// is still produced and the deficit shows up in its score.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster has no staff rows.
    #[error("Roster has no staff")]
    EmptyStaff,

    /// A staff row does not cover the whole period.
    #[error("Staff {staff} has {actual} days, period has {expected}")]
    PeriodMismatch {
        staff: StaffId,
        expected: usize,
        actual: usize,
    },

    /// A staff id is referenced but has no roster row.
    #[error("Unknown staff: {0}")]
    UnknownStaff(StaffId),

    /// The same staff id appears on two roster rows.
    #[error("Duplicate staff: {0}")]
    DuplicateStaff(StaffId),

    /// A parameter is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Calendar construction failed.
    #[error("Invalid calendar: {0}")]
    InvalidCalendar(String),

    /// A shift or cell code could not be parsed.
    #[error("Cannot parse shift code: {0:?}")]
    ParseShift(String),

    /// Error in solver configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for RosterForge operations
pub type Result<T> = std::result::Result<T, RosterError>;
