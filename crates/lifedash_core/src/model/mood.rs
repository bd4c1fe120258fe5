//! Daily mood entries, stored under `mood-entries`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: EntityId,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
    /// Emoji picked by the user.
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

impl_entity!(MoodEntry, "mood-entries", ["date"]);
