//! Tutoring sessions, stored under `tutoring-sessions`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use crate::model::validation::{
    clock_minutes, require_clock_time, require_text, ValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutoringSession {
    pub id: EntityId,
    pub student_name: String,
    pub subject: String,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
    /// `HH:MM`, 24h.
    pub start_time: String,
    /// `HH:MM`, 24h.
    pub end_time: String,
    pub duration_hours: f64,
    pub hourly_rate: f64,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, with = "iso8601::option", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
}

impl TutoringSession {
    /// Amount owed for this session.
    pub fn amount(&self) -> f64 {
        self.duration_hours * self.hourly_rate
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("studentName", &self.student_name)?;
        require_text("subject", &self.subject)?;
        require_clock_time("startTime", &self.start_time)?;
        require_clock_time("endTime", &self.end_time)?;
        if clock_minutes(&self.end_time) <= clock_minutes(&self.start_time) {
            return Err(ValidationError::EndNotAfterStart { field: "endTime" });
        }
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "hourlyRate",
                value: self.hourly_rate.to_string(),
            });
        }
        Ok(())
    }
}

impl_entity!(TutoringSession, "tutoring-sessions", ["date", "paymentDate"]);
