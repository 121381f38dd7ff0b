//! Which staff may work which shift.

use std::collections::{BTreeMap, BTreeSet};

use crate::shift::ShiftKind;
use crate::staff::StaffId;

/// Mapping from shift kind to the set of staff permitted to work it.
///
/// A staff member may appear under several shifts.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Eligibility, ShiftKind, StaffId};
///
/// let eligibility = Eligibility::new()
///     .with(ShiftKind::Night, [StaffId::new(1), StaffId::new(2)])
///     .with(ShiftKind::Day, [StaffId::new(2)]);
///
/// assert!(eligibility.is_eligible(ShiftKind::Night, StaffId::new(1)));
/// assert!(!eligibility.is_eligible(ShiftKind::Day, StaffId::new(1)));
/// assert_eq!(eligibility.staff_for(ShiftKind::Float).count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eligibility {
    by_shift: BTreeMap<ShiftKind, BTreeSet<StaffId>>,
}

impl Eligibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds staff to a shift (builder form).
    pub fn with(mut self, shift: ShiftKind, staff: impl IntoIterator<Item = StaffId>) -> Self {
        self.allow_all(shift, staff);
        self
    }

    /// Permits one staff member to work `shift`.
    pub fn allow(&mut self, shift: ShiftKind, staff: StaffId) {
        self.by_shift.entry(shift).or_default().insert(staff);
    }

    /// Permits several staff members to work `shift`.
    pub fn allow_all(&mut self, shift: ShiftKind, staff: impl IntoIterator<Item = StaffId>) {
        self.by_shift.entry(shift).or_default().extend(staff);
    }

    #[inline]
    pub fn is_eligible(&self, shift: ShiftKind, staff: StaffId) -> bool {
        self.by_shift
            .get(&shift)
            .is_some_and(|set| set.contains(&staff))
    }

    /// Staff eligible for `shift`; empty when nobody is.
    pub fn staff_for(&self, shift: ShiftKind) -> impl Iterator<Item = StaffId> + '_ {
        self.by_shift.get(&shift).into_iter().flatten().copied()
    }

    /// Every staff id mentioned under any shift.
    pub fn all_staff(&self) -> BTreeSet<StaffId> {
        self.by_shift.values().flatten().copied().collect()
    }
}
