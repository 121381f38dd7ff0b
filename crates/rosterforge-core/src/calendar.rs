//! Calendar metadata for a rostering period.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{Result, RosterError};

/// Period length and per-day weekday flags.
///
/// Only weekday-restricted shifts look at the flags.
///
/// # Examples
///
/// ```
/// use rosterforge_core::Calendar;
///
/// // February 2026 starts on a Sunday.
/// let calendar = Calendar::for_month(2026, 2).unwrap();
/// assert_eq!(calendar.days(), 28);
/// assert!(!calendar.is_weekday(0));
/// assert!(calendar.is_weekday(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    weekdays: Vec<bool>,
}

impl Calendar {
    /// A period where every day counts as a weekday.
    pub fn all_weekdays(days: usize) -> Self {
        Self {
            weekdays: vec![true; days],
        }
    }

    /// A period with explicit weekday flags, one per day.
    pub fn from_weekdays(weekdays: Vec<bool>) -> Self {
        Self { weekdays }
    }

    /// `days` consecutive dates starting at `start`; Monday to Friday are weekdays.
    pub fn starting_on(start: NaiveDate, days: usize) -> Self {
        let weekdays = (0..days)
            .map(|offset| {
                let date = start + Duration::days(offset as i64);
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            })
            .collect();
        Self { weekdays }
    }

    /// The whole calendar month `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCalendar` for a month outside 1-12 or an
    /// unrepresentable year.
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            RosterError::InvalidCalendar(format!("no such month: {year}-{month:02}"))
        })?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
            RosterError::InvalidCalendar(format!("month after {year}-{month:02} is out of range"))
        })?;
        let days = (next - first).num_days() as usize;
        Ok(Self::starting_on(first, days))
    }

    /// Number of days in the period.
    #[inline]
    pub fn days(&self) -> usize {
        self.weekdays.len()
    }

    /// Whether `day` (0-based) is a weekday. Days outside the period are not.
    #[inline]
    pub fn is_weekday(&self, day: usize) -> bool {
        self.weekdays.get(day).copied().unwrap_or(false)
    }
}
