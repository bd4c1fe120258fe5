//! Sleep log entries, stored under `sleep-entries`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    pub id: EntityId,
    #[serde(with = "iso8601")]
    pub sleep_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub wake_time: DateTime<Utc>,
    pub quality: SleepQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SleepEntry {
    /// Wake time must be strictly after sleep time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.wake_time <= self.sleep_time {
            return Err(ValidationError::EndNotAfterStart { field: "wakeTime" });
        }
        Ok(())
    }
}

impl_entity!(SleepEntry, "sleep-entries", ["sleepTime", "wakeTime"]);
