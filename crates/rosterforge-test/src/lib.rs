//! Shared test fixtures for RosterForge crates.
//!
//! This crate provides problem builders and pure roster checks for testing.
//! It depends only on `rosterforge-core` so every crate can use it.
//!
//! - [`scenario`] - ready-made rostering problems
//! - [`properties`] - roster property helpers (runs, transitions, rest)
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rosterforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rosterforge_test::scenario::ward_scenario;
//! use rosterforge_test::properties::longest_run;
//! ```

pub mod properties;
pub mod scenario;

pub use properties::{
    forbidden_transitions, longest_run, pinned_cells_preserved, shortage_by_day, staff_ids,
};
pub use scenario::{single_night_scenario, uniform_scenario, ward_scenario};
