//! Weekly timetable events (`schedule-events`) and dated overview items
//! (`schedule`).

use crate::model::area::LifeArea;
use crate::model::entity::{impl_area_tagged, impl_entity, EntityId};
use crate::model::iso8601;
use crate::model::validation::{
    clock_minutes, require_clock_time, require_text, require_weekdays, ValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recurring slot in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: EntityId,
    pub title: String,
    /// Weekday index, Sunday = 0.
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<LifeArea>,
}

impl ScheduleEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_weekdays(&[self.day])?;
        require_clock_time("startTime", &self.start_time)?;
        require_clock_time("endTime", &self.end_time)?;
        if clock_minutes(&self.end_time) <= clock_minutes(&self.start_time) {
            return Err(ValidationError::EndNotAfterStart { field: "endTime" });
        }
        Ok(())
    }
}

impl_entity!(ScheduleEvent, "schedule-events", []);
impl_area_tagged!(ScheduleEvent);

/// One-off dated block shown in the weekly overview calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: EntityId,
    pub title: String,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<LifeArea>,
}

impl_entity!(ScheduleItem, "schedule", ["startTime", "endTime"]);
impl_area_tagged!(ScheduleItem);
