//! RosterForge Core - Core types for shift rostering
//!
//! This crate provides the fundamental abstractions for RosterForge:
//! - Staff identifiers, shift kinds and roster cells
//! - The roster grid and its derived per-staff tallies
//! - Calendar, eligibility, demand and shift rule tables
//! - The roster score used to compare generated rosters

pub mod calendar;
pub mod eligibility;
pub mod error;
pub mod params;
pub mod problem;
pub mod roster;
pub mod rules;
pub mod score;
pub mod shift;
pub mod staff;

pub use calendar::Calendar;
pub use eligibility::Eligibility;
pub use error::{Result, RosterError};
pub use params::{RosterParameters, ShiftDemand};
pub use problem::RosterProblem;
pub use roster::{Roster, RosterRow, StaffTally};
pub use rules::{ShiftRules, Transition, TransitionTable};
pub use score::RosterScore;
pub use shift::{Cell, ShiftKind};
pub use staff::StaffId;
