//! Habit records, stored under `habits`.

use crate::model::area::LifeArea;
use crate::model::entity::{impl_area_tagged, impl_entity, EntityId};
use crate::model::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a habit is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    /// Every day.
    Daily,
    /// Once a week, on Monday.
    Weekly,
    /// On the weekdays listed in `custom_days`.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub frequency: HabitFrequency,
    /// Weekday indexes, Sunday = 0. Only read for `Custom` frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_days: Option<Vec<u8>>,
    #[serde(default, with = "iso8601::list")]
    pub completed_dates: Vec<DateTime<Utc>>,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<LifeArea>,
}

impl Habit {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        frequency: HabitFrequency,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            frequency,
            custom_days: None,
            completed_dates: Vec::new(),
            created_at: iso8601::truncate(created_at),
            color: String::new(),
            goal: None,
            unit: None,
            area: None,
        }
    }
}

/// Preset offered when creating a habit from suggestions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitSuggestion {
    pub name: &'static str,
    pub description: &'static str,
    pub frequency: HabitFrequency,
    pub goal: f64,
    pub unit: &'static str,
}

pub const HABIT_SUGGESTIONS: &[HabitSuggestion] = &[
    HabitSuggestion {
        name: "Drink Water",
        description: "Stay hydrated throughout the day",
        frequency: HabitFrequency::Daily,
        goal: 8.0,
        unit: "glasses",
    },
    HabitSuggestion {
        name: "Read",
        description: "Expand your knowledge and relax",
        frequency: HabitFrequency::Daily,
        goal: 30.0,
        unit: "minutes",
    },
    HabitSuggestion {
        name: "Exercise",
        description: "Stay active and improve your health",
        frequency: HabitFrequency::Daily,
        goal: 30.0,
        unit: "minutes",
    },
    HabitSuggestion {
        name: "Meditate",
        description: "Practice mindfulness and reduce stress",
        frequency: HabitFrequency::Daily,
        goal: 10.0,
        unit: "minutes",
    },
    HabitSuggestion {
        name: "Write",
        description: "Express your thoughts and ideas",
        frequency: HabitFrequency::Daily,
        goal: 30.0,
        unit: "minutes",
    },
];

/// Palette assigned round-robin to new habits.
pub const HABIT_COLORS: &[&str] = &[
    "bg-red-500",
    "bg-green-500",
    "bg-blue-500",
    "bg-yellow-500",
    "bg-purple-500",
    "bg-orange-500",
    "bg-pink-500",
    "bg-teal-500",
];

impl_entity!(Habit, "habits", ["completedDates", "createdAt"]);
impl_area_tagged!(Habit);
