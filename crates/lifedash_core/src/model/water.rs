//! Water intake logs, stored under `water-logs`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: EntityId,
    /// Millilitres, whatever unit the user entered.
    pub amount: f64,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl_entity!(WaterLog, "water-logs", ["timestamp"]);
