//! University assignments, stored under `assignments`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use crate::model::task::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub course: String,
    #[serde(with = "iso8601")]
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub status: AssignmentStatus,
    pub importance: Priority,
}

impl_entity!(Assignment, "assignments", ["dueDate"]);
