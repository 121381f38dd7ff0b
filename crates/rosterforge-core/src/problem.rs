//! The complete input of one generation run.

use crate::calendar::Calendar;
use crate::eligibility::Eligibility;
use crate::error::{Result, RosterError};
use crate::params::RosterParameters;
use crate::roster::Roster;
use crate::rules::ShiftRules;
use crate::shift::ShiftKind;

/// Roster skeleton plus everything needed to fill it.
///
/// The skeleton may hold `FixedRest` cells or manual entries; every
/// non-empty skeleton cell is kept as-is by the generator.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterProblem {
    pub roster: Roster,
    pub calendar: Calendar,
    pub eligibility: Eligibility,
    pub params: RosterParameters,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: ShiftRules,
}

impl RosterProblem {
    /// Creates a problem with the default shift rules.
    pub fn new(
        roster: Roster,
        calendar: Calendar,
        eligibility: Eligibility,
        params: RosterParameters,
    ) -> Self {
        Self {
            roster,
            calendar,
            eligibility,
            params,
            rules: ShiftRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: ShiftRules) -> Self {
        self.rules = rules;
        self
    }

    #[inline]
    pub fn days(&self) -> usize {
        self.calendar.days()
    }

    #[inline]
    pub fn staff_count(&self) -> usize {
        self.roster.staff_count()
    }

    /// Headcount required for `shift` on `day`.
    ///
    /// Weekday-only shifts require nobody on other days.
    pub fn required(&self, day: usize, shift: ShiftKind) -> u32 {
        if self.rules.is_weekday_only(shift) && !self.calendar.is_weekday(day) {
            0
        } else {
            self.params.demand.get(shift)
        }
    }

    /// Rejects inputs the generator cannot work with.
    ///
    /// An empty eligibility set for a shift is fine: that shift simply
    /// stays short every day.
    ///
    /// # Errors
    ///
    /// - `EmptyStaff` when the roster has no rows
    /// - `PeriodMismatch` when rows and calendar disagree on the period
    /// - `UnknownStaff` when eligibility names staff without a row
    /// - `InvalidParameter` for out-of-range parameters
    pub fn validate(&self) -> Result<()> {
        if self.roster.is_empty() {
            return Err(RosterError::EmptyStaff);
        }
        if self.roster.days() != self.calendar.days() {
            return Err(RosterError::PeriodMismatch {
                staff: self.roster.staff_id(0),
                expected: self.calendar.days(),
                actual: self.roster.days(),
            });
        }
        if let Some(unknown) = self
            .eligibility
            .all_staff()
            .into_iter()
            .find(|id| self.roster.index_of(*id).is_none())
        {
            return Err(RosterError::UnknownStaff(unknown));
        }
        self.params.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ShiftDemand;
    use crate::staff::StaffId;

    fn problem(staff: u32, days: usize) -> RosterProblem {
        let ids: Vec<StaffId> = (0..staff).map(StaffId::new).collect();
        RosterProblem::new(
            Roster::new(ids.clone(), days).unwrap(),
            Calendar::all_weekdays(days),
            Eligibility::new().with(ShiftKind::Day, ids),
            RosterParameters::new(ShiftDemand::new(1, 0, 0, 0)),
        )
    }

    #[test]
    fn test_valid_problem() {
        assert!(problem(3, 7).validate().is_ok());
    }

    #[test]
    fn test_empty_staff_rejected() {
        let mut p = problem(1, 7);
        p.roster = Roster::new(Vec::<StaffId>::new(), 7).unwrap();
        assert!(matches!(p.validate(), Err(RosterError::EmptyStaff)));
    }

    #[test]
    fn test_calendar_mismatch_rejected() {
        let mut p = problem(2, 7);
        p.calendar = Calendar::all_weekdays(6);
        assert!(matches!(
            p.validate(),
            Err(RosterError::PeriodMismatch {
                expected: 6,
                actual: 7,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_eligible_staff_rejected() {
        let mut p = problem(2, 7);
        p.eligibility.allow(ShiftKind::Night, StaffId::new(42));
        assert!(matches!(
            p.validate(),
            Err(RosterError::UnknownStaff(id)) if id == StaffId::new(42)
        ));
    }

    #[test]
    fn test_zero_max_consecutive_rejected() {
        let mut p = problem(2, 7);
        p.params.max_consecutive = 0;
        assert!(matches!(p.validate(), Err(RosterError::InvalidParameter(_))));
    }

    #[test]
    fn test_weekday_only_required() {
        let mut p = problem(2, 7);
        p.params.demand.float = 1;
        p.calendar = Calendar::from_weekdays(vec![true, true, true, true, true, false, false]);
        p.rules = p.rules.with_weekday_only([ShiftKind::Float]);
        assert_eq!(p.required(0, ShiftKind::Float), 1);
        assert_eq!(p.required(5, ShiftKind::Float), 0);
        assert_eq!(p.required(5, ShiftKind::Day), 1);
    }
}
