//! Workout and body-weight logs, stored under `workouts` and `weight-entries`.

use crate::model::entity::{impl_entity, EntityId};
use crate::model::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: EntityId,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
    /// Free-form workout kind ("Cardio", "Strength", template name...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes.
    pub duration: u32,
    pub intensity: Intensity,
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
}

impl_entity!(Workout, "workouts", ["date"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: EntityId,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
    pub weight: f64,
    pub unit: WeightUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl_entity!(WeightEntry, "weight-entries", ["date"]);

/// One exercise line of a workout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateExercise {
    pub name: &'static str,
    /// Set count, or `-` for continuous work.
    pub sets: &'static str,
    pub reps: &'static str,
}

/// Named preset used to prefill a workout's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub exercises: &'static [TemplateExercise],
}

impl WorkoutTemplate {
    /// Renders exercises as one `name: sets x reps` line each.
    pub fn details(&self) -> String {
        self.exercises
            .iter()
            .map(|exercise| format!("{}: {} x {}", exercise.name, exercise.sets, exercise.reps))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub const WORKOUT_TEMPLATES: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        id: "glutes-hamstring",
        name: "Glutes and Hamstring",
        exercises: &[
            TemplateExercise { name: "Hip Thrust", sets: "3", reps: "10" },
            TemplateExercise { name: "Cable Glute Kickback", sets: "3", reps: "10" },
            TemplateExercise { name: "Abduction", sets: "3", reps: "10" },
            TemplateExercise { name: "Treadmill", sets: "-", reps: "30mins" },
        ],
    },
    WorkoutTemplate {
        id: "back-shoulders",
        name: "Back and Shoulders",
        exercises: &[
            TemplateExercise { name: "Assisted Chin Up", sets: "3", reps: "10" },
            TemplateExercise { name: "Lat pull down", sets: "3", reps: "10" },
            TemplateExercise { name: "Seated arnold press", sets: "3", reps: "10" },
            TemplateExercise { name: "Lateral raise", sets: "3", reps: "10" },
            TemplateExercise { name: "Front raise", sets: "3", reps: "10" },
            TemplateExercise { name: "Treadmill", sets: "-", reps: "30mins" },
        ],
    },
    WorkoutTemplate {
        id: "quad-glutes",
        name: "Quad and Glutes",
        exercises: &[
            TemplateExercise { name: "Hip thrust", sets: "3", reps: "10" },
            TemplateExercise { name: "Abduction", sets: "3", reps: "20-25" },
            TemplateExercise { name: "RDL", sets: "3", reps: "10" },
            TemplateExercise { name: "Cable Glute Kickback", sets: "3", reps: "MAX" },
        ],
    },
    WorkoutTemplate {
        id: "ab-finisher",
        name: "Ab Finisher",
        exercises: &[
            TemplateExercise { name: "Dead bug with plates", sets: "50 seconds", reps: "x3" },
            TemplateExercise { name: "Star side plank", sets: "50 seconds", reps: "x3" },
            TemplateExercise { name: "Flutter kicks", sets: "50 seconds", reps: "x3" },
        ],
    },
];

/// Looks up a template by its stable id.
pub fn workout_template(id: &str) -> Option<&'static WorkoutTemplate> {
    WORKOUT_TEMPLATES.iter().find(|template| template.id == id)
}
