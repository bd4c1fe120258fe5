//! Assignment progress/status coupling and ordering.
//!
//! # Invariants
//! - Progress 0 is `not-started`, 100 is `completed`, anything between is
//!   `in-progress`; setting a status moves progress to match.

use crate::model::assignment::{Assignment, AssignmentStatus};
use crate::model::entity::EntityId;
use crate::store::Collection;
use chrono::{DateTime, Utc};

pub fn status_for_progress(progress: u8) -> AssignmentStatus {
    match progress {
        0 => AssignmentStatus::NotStarted,
        100..=u8::MAX => AssignmentStatus::Completed,
        _ => AssignmentStatus::InProgress,
    }
}

/// Sets progress (clamped to 100) and derives the status.
pub fn update_progress(
    assignments: Collection<Assignment>,
    id: &EntityId,
    progress: u8,
) -> Collection<Assignment> {
    let progress = progress.min(100);
    assignments.update(id, |mut assignment| {
        assignment.progress = progress;
        assignment.status = status_for_progress(progress);
        assignment
    })
}

/// Sets status; `not-started` resets progress to 0, `completed` fills it.
pub fn update_status(
    assignments: Collection<Assignment>,
    id: &EntityId,
    status: AssignmentStatus,
) -> Collection<Assignment> {
    assignments.update(id, |mut assignment| {
        assignment.status = status;
        match status {
            AssignmentStatus::NotStarted => assignment.progress = 0,
            AssignmentStatus::Completed => assignment.progress = 100,
            AssignmentStatus::InProgress => {}
        }
        assignment
    })
}

/// Open assignments by due date, then completed ones by due date.
pub fn sort_for_display<'a>(
    assignments: impl IntoIterator<Item = &'a Assignment>,
) -> Vec<&'a Assignment> {
    let mut sorted: Vec<&Assignment> = assignments.into_iter().collect();
    sorted.sort_by_key(|assignment| {
        (
            assignment.status == AssignmentStatus::Completed,
            assignment.due_date,
        )
    });
    sorted
}

pub fn is_overdue(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    assignment.status != AssignmentStatus::Completed && assignment.due_date < now
}

pub fn overdue_count(assignments: &[Assignment], now: DateTime<Utc>) -> usize {
    assignments
        .iter()
        .filter(|assignment| is_overdue(assignment, now))
        .count()
}

pub fn completed_count(assignments: &[Assignment]) -> usize {
    assignments
        .iter()
        .filter(|assignment| assignment.status == AssignmentStatus::Completed)
        .count()
}
