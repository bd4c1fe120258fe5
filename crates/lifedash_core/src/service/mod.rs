//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate credential repository calls (`auth_service`).
//! - Provide the per-widget derived views and record mutations as pure
//!   functions over loaded collections.
//!
//! # Invariants
//! - Widget functions never read the wall clock; callers pass `now`/`today`.
//! - Calendar days are evaluated in UTC.
//! - Derived views are recomputed on every call, never cached.

pub mod area;
pub mod assignments;
pub mod auth_service;
pub mod fitness;
pub mod habits;
pub mod mood;
pub mod pomodoro;
pub mod reminders;
pub mod schedule;
pub mod sleep;
pub mod stats;
pub mod study;
pub mod tasks;
pub mod tutoring;
pub mod water;

use chrono::Datelike;

/// Weekday index used across widgets, Sunday = 0.
pub(crate) fn weekday_index(value: &impl Datelike) -> u8 {
    // num_days_from_sunday is 0..=6.
    value.weekday().num_days_from_sunday() as u8
}
