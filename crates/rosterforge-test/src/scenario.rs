//! Ready-made rostering problems.

use rosterforge_core::{
    Calendar, Eligibility, Roster, RosterParameters, RosterProblem, ShiftDemand, ShiftKind,
    StaffId,
};

/// Staff ids `0..n`.
pub fn ids(n: u32) -> Vec<StaffId> {
    (0..n).map(StaffId::new).collect()
}

/// A ward of 10 staff over 28 weekdays.
///
/// Staff 0-2 work nights, 3-6 evenings and 4-9 days, so three of the
/// evening staff can also cover days. Demand is D3 E2 N2 with 8 rest days
/// and at most 5 consecutive working days.
pub fn ward_scenario() -> RosterProblem {
    let staff = ids(10);
    let eligibility = Eligibility::new()
        .with(ShiftKind::Night, staff[0..3].iter().copied())
        .with(ShiftKind::Evening, staff[3..7].iter().copied())
        .with(ShiftKind::Day, staff[4..10].iter().copied());
    let params = RosterParameters::new(ShiftDemand::new(3, 2, 2, 0))
        .with_min_rest_days(8)
        .with_max_consecutive(5);

    RosterProblem::new(
        Roster::new(staff, 28).expect("fixture staff ids are unique"),
        Calendar::all_weekdays(28),
        eligibility,
        params,
    )
}

/// `staff` members eligible for every shift, over `days` weekdays.
pub fn uniform_scenario(
    staff: u32,
    days: usize,
    demand: ShiftDemand,
    min_rest_days: u32,
    max_consecutive: u32,
) -> RosterProblem {
    let staff = ids(staff);
    let eligibility = ShiftKind::ALL
        .iter()
        .fold(Eligibility::new(), |e, &shift| e.with(shift, staff.iter().copied()));
    let params = RosterParameters::new(demand)
        .with_min_rest_days(min_rest_days)
        .with_max_consecutive(max_consecutive);

    RosterProblem::new(
        Roster::new(staff, days).expect("fixture staff ids are unique"),
        Calendar::all_weekdays(days),
        eligibility,
        params,
    )
}

/// Two nights a day required but a single night-eligible staff member.
///
/// Staff 1-4 cover evenings and days; nobody else may work nights.
pub fn single_night_scenario(days: usize) -> RosterProblem {
    let staff = ids(5);
    let eligibility = Eligibility::new()
        .with(ShiftKind::Night, [staff[0]])
        .with(ShiftKind::Evening, staff[1..].iter().copied())
        .with(ShiftKind::Day, staff[1..].iter().copied());
    let params = RosterParameters::new(ShiftDemand::new(1, 1, 2, 0))
        .with_min_rest_days(2)
        .with_max_consecutive(5);

    RosterProblem::new(
        Roster::new(staff, days).expect("fixture staff ids are unique"),
        Calendar::all_weekdays(days),
        eligibility,
        params,
    )
}
