//! Workout calorie estimates, weekly totals and weight trend.

use crate::model::fitness::{Intensity, WeightEntry, Workout, WorkoutTemplate, WORKOUT_TEMPLATES};
use chrono::{DateTime, Days, Utc};

const KCAL_PER_MINUTE: f64 = 5.0;

/// Rough burn estimate: 5 kcal/min, x1.5 for high and x0.7 for low intensity.
pub fn estimate_calories(duration_minutes: u32, intensity: Intensity) -> u32 {
    let factor = match intensity {
        Intensity::High => 1.5,
        Intensity::Medium => 1.0,
        Intensity::Low => 0.7,
    };
    (f64::from(duration_minutes) * KCAL_PER_MINUTE * factor).round() as u32
}

/// Fills `calories_burned` when the caller left it empty.
pub fn with_estimated_calories(mut workout: Workout) -> Workout {
    if workout.calories_burned.is_none() {
        workout.calories_burned = Some(estimate_calories(workout.duration, workout.intensity));
    }
    workout
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyActivity {
    pub workouts: usize,
    pub minutes: u32,
}

/// Workouts dated within the 7 days before `now` (inclusive).
pub fn weekly_activity(workouts: &[Workout], now: DateTime<Utc>) -> WeeklyActivity {
    let since = now.checked_sub_days(Days::new(7)).unwrap_or(DateTime::<Utc>::MIN_UTC);
    workouts
        .iter()
        .filter(|workout| workout.date >= since)
        .fold(WeeklyActivity::default(), |mut total, workout| {
            total.workouts += 1;
            total.minutes += workout.duration;
            total
        })
}

/// Most recent first.
pub fn recent_workouts(workouts: &[Workout]) -> Vec<&Workout> {
    let mut sorted: Vec<&Workout> = workouts.iter().collect();
    sorted.sort_by(|left, right| right.date.cmp(&left.date));
    sorted
}

/// Oldest first, the order used for the trend chart.
pub fn weight_history(entries: &[WeightEntry]) -> Vec<&WeightEntry> {
    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    sorted.sort_by(|left, right| left.date.cmp(&right.date));
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightTrend<'a> {
    pub latest: &'a WeightEntry,
    /// Latest minus the previous entry; `None` with a single entry.
    pub change: Option<f64>,
}

pub fn weight_trend(entries: &[WeightEntry]) -> Option<WeightTrend<'_>> {
    let history = weight_history(entries);
    let (&latest, earlier) = history.split_last()?;
    Some(WeightTrend {
        latest,
        change: earlier.last().map(|previous| latest.weight - previous.weight),
    })
}

pub fn templates() -> &'static [WorkoutTemplate] {
    WORKOUT_TEMPLATES
}
