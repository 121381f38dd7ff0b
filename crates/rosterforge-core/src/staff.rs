//! Staff identifiers.

use std::fmt;

/// Opaque, stable identifier of a staff member.
///
/// Display names belong to the caller; the engine only ever compares ids,
/// so two people sharing a name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaffId(u32);

impl StaffId {
    /// Creates a staff id from its raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        StaffId(raw)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StaffId {
    fn from(raw: u32) -> Self {
        StaffId(raw)
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "staff-{}", self.0)
    }
}
