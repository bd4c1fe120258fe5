//! Task (to-do) records, stored under `todos`.

use crate::model::area::LifeArea;
use crate::model::entity::{impl_area_tagged, impl_entity, EntityId};
use crate::model::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-level ranking shared by tasks, study topics and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank, highest priority first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "iso8601::option")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<LifeArea>,
}

impl Task {
    /// Open task with no due date and no area.
    pub fn new(id: EntityId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            due_date: None,
            priority,
            area: None,
        }
    }
}

impl_entity!(Task, "todos", ["dueDate"]);
impl_area_tagged!(Task);
