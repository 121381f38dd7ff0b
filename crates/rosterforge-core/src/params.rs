//! Generation parameters: demand, rest and run-length limits.

use crate::error::{Result, RosterError};
use crate::shift::ShiftKind;

/// Required daily headcount per shift kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct ShiftDemand {
    pub day: u32,
    pub evening: u32,
    pub night: u32,
    pub float: u32,
}

impl ShiftDemand {
    pub const fn new(day: u32, evening: u32, night: u32, float: u32) -> Self {
        Self {
            day,
            evening,
            night,
            float,
        }
    }

    /// Headcount required for `shift` on a day where it applies.
    #[inline]
    pub const fn get(&self, shift: ShiftKind) -> u32 {
        match shift {
            ShiftKind::Day => self.day,
            ShiftKind::Evening => self.evening,
            ShiftKind::Night => self.night,
            ShiftKind::Float => self.float,
        }
    }

    pub fn set(&mut self, shift: ShiftKind, headcount: u32) {
        match shift {
            ShiftKind::Day => self.day = headcount,
            ShiftKind::Evening => self.evening = headcount,
            ShiftKind::Night => self.night = headcount,
            ShiftKind::Float => self.float = headcount,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, shift: ShiftKind, headcount: u32) -> Self {
        self.set(shift, headcount);
        self
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct RosterParameters {
    /// Required daily headcount per shift.
    pub demand: ShiftDemand,
    /// Minimum rest days per staff member over the period.
    pub min_rest_days: u32,
    /// Maximum allowed consecutive working days.
    pub max_consecutive: u32,
    /// Enables the cross-category support resolver.
    pub support_enabled: bool,
}

impl Default for RosterParameters {
    fn default() -> Self {
        Self {
            demand: ShiftDemand::default(),
            min_rest_days: 8,
            max_consecutive: 5,
            support_enabled: false,
        }
    }
}

impl RosterParameters {
    pub fn new(demand: ShiftDemand) -> Self {
        Self {
            demand,
            ..Self::default()
        }
    }

    pub fn with_min_rest_days(mut self, days: u32) -> Self {
        self.min_rest_days = days;
        self
    }

    pub fn with_max_consecutive(mut self, days: u32) -> Self {
        self.max_consecutive = days;
        self
    }

    pub fn with_support(mut self, enabled: bool) -> Self {
        self.support_enabled = enabled;
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `max_consecutive` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_consecutive == 0 {
            return Err(RosterError::InvalidParameter(
                "max_consecutive must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
