//! Single-value settings documents.
//!
//! Every field has a default so partially written documents still load.

use crate::model::entity::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomodoroSettings {
    /// Minutes.
    pub work_duration: u32,
    /// Minutes.
    pub break_duration: u32,
    /// Minutes.
    pub long_break_duration: u32,
    /// Completed work sessions between long breaks.
    pub long_break_interval: u32,
    pub auto_start_breaks: bool,
    pub auto_start_work: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_duration: 25,
            break_duration: 5,
            long_break_duration: 15,
            long_break_interval: 4,
            auto_start_breaks: true,
            auto_start_work: true,
        }
    }
}

impl Document for PomodoroSettings {
    const DOCUMENT_KEY: &'static str = "pomodoro-settings";
}

/// Lifetime count of finished pomodoro work sessions (a bare JSON integer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedPomodoros(pub u32);

impl Document for CompletedPomodoros {
    const DOCUMENT_KEY: &'static str = "completed-pomodoros";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterSettings {
    /// Millilitres.
    pub daily_goal: f64,
    /// Quick-add buttons, millilitres.
    pub default_amounts: Vec<f64>,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            daily_goal: 2000.0,
            default_amounts: vec![250.0, 500.0, 750.0],
        }
    }
}

impl Document for WaterSettings {
    const DOCUMENT_KEY: &'static str = "water-settings";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[default]
    #[serde(rename = "ml")]
    Millilitres,
    #[serde(rename = "fl oz")]
    FluidOunces,
}

/// Dashboard-wide preferences shared by the settings panel and the
/// water/stat widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    pub notifications_enabled: bool,
    /// Minutes between water reminders.
    pub water_reminder_interval: u32,
    pub dark_mode: bool,
    pub username: String,
    pub volume_unit: VolumeUnit,
    pub use_metric_system: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            water_reminder_interval: 60,
            dark_mode: false,
            username: String::new(),
            volume_unit: VolumeUnit::Millilitres,
            use_metric_system: true,
        }
    }
}

impl Document for DashboardSettings {
    const DOCUMENT_KEY: &'static str = "dashboard-settings";
}
