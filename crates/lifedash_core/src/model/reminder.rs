//! Recurring reminders, stored under `reminders`.

use crate::model::area::LifeArea;
use crate::model::entity::{impl_area_tagged, impl_entity, EntityId};
use crate::model::iso8601;
use crate::model::validation::{require_clock_time, require_text, require_weekdays, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Supplement,
    Water,
    Medication,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    /// `HH:MM`, 24h.
    pub time: String,
    /// Weekday indexes, Sunday = 0.
    pub days: Vec<u8>,
    pub enabled: bool,
    #[serde(default, with = "iso8601::option")]
    pub last_completed: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<LifeArea>,
}

impl Reminder {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_clock_time("time", &self.time)?;
        require_weekdays(&self.days)
    }
}

impl_entity!(Reminder, "reminders", ["lastCompleted"]);
impl_area_tagged!(Reminder);
