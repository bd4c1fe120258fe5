//! Typed per-widget schemas persisted in the local store.
//!
//! # Responsibility
//! - Define one explicit record shape per widget collection.
//! - Declare which fields carry date-times so decode and encode stay symmetric.
//!
//! # Invariants
//! - Every collection record is addressed by a unique `EntityId`.
//! - Records change only by full replacement; there are no tombstones.
//! - JSON field names stay camelCase to read existing browser data.

pub mod area;
pub mod assignment;
pub mod entity;
pub mod fitness;
pub mod habit;
pub mod iso8601;
pub mod mood;
pub mod reminder;
pub mod schedule;
pub mod settings;
pub mod sleep;
pub mod study;
pub mod task;
pub mod tutoring;
pub mod validation;
pub mod water;
