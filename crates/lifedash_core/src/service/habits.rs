//! Habit due-day rules, completion toggling and streaks.
//!
//! # Invariants
//! - Weekly habits are due on Monday.
//! - At most one completion per calendar day is recorded by
//!   `toggle_completion`; older data with duplicates still counts once.

use super::weekday_index;
use crate::model::entity::EntityId;
use crate::model::habit::{
    Habit, HabitFrequency, HabitSuggestion, HABIT_COLORS, HABIT_SUGGESTIONS,
};
use crate::model::iso8601;
use crate::store::Collection;
use chrono::{DateTime, Days, NaiveDate, Utc};

const MONDAY: u8 = 1;

pub fn is_due_on(habit: &Habit, date: NaiveDate) -> bool {
    let day = weekday_index(&date);
    match habit.frequency {
        HabitFrequency::Daily => true,
        HabitFrequency::Weekly => day == MONDAY,
        HabitFrequency::Custom => habit
            .custom_days
            .as_deref()
            .is_some_and(|days| days.contains(&day)),
    }
}

pub fn is_completed_on(habit: &Habit, date: NaiveDate) -> bool {
    habit
        .completed_dates
        .iter()
        .any(|completed| completed.date_naive() == date)
}

/// Removes the completions of `now`'s day, or records `now` when there are none.
pub fn toggle_completion(habit: &Habit, now: DateTime<Utc>) -> Habit {
    let today = now.date_naive();
    let mut next = habit.clone();
    if is_completed_on(habit, today) {
        next.completed_dates
            .retain(|completed| completed.date_naive() != today);
    } else {
        next.completed_dates.push(iso8601::truncate(now));
    }
    next
}

/// [`toggle_completion`] applied to one record of the collection.
pub fn toggle_in(
    habits: Collection<Habit>,
    id: &EntityId,
    now: DateTime<Utc>,
) -> Collection<Habit> {
    habits.update(id, |habit| toggle_completion(&habit, now))
}

/// Consecutive due days completed, counting back from `today`.
///
/// Today counts when it is completed or not due at all; an open due day
/// today gives 0. Days on which the habit is not due are skipped.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    if habit.completed_dates.is_empty() {
        return 0;
    }
    if is_due_on(habit, today) && !is_completed_on(habit, today) {
        return 0;
    }
    if !has_any_due_day(habit) {
        return 1;
    }

    let mut streak = 1;
    let mut day = today;
    while let Some(previous) = day.checked_sub_days(Days::new(1)) {
        day = previous;
        if !is_due_on(habit, day) {
            continue;
        }
        if !is_completed_on(habit, day) {
            break;
        }
        streak += 1;
    }
    streak
}

fn has_any_due_day(habit: &Habit) -> bool {
    match habit.frequency {
        HabitFrequency::Daily | HabitFrequency::Weekly => true,
        HabitFrequency::Custom => habit
            .custom_days
            .as_deref()
            .is_some_and(|days| days.iter().any(|day| *day <= 6)),
    }
}

/// Habits due on `date`, open ones first.
pub fn due_today<'a>(
    habits: impl IntoIterator<Item = &'a Habit>,
    date: NaiveDate,
) -> Vec<&'a Habit> {
    let mut due: Vec<&Habit> = habits
        .into_iter()
        .filter(|habit| is_due_on(habit, date))
        .collect();
    due.sort_by_key(|habit| is_completed_on(habit, date));
    due
}

/// `(completed, due)` for `date`.
pub fn completion_counts<'a>(
    habits: impl IntoIterator<Item = &'a Habit>,
    date: NaiveDate,
) -> (usize, usize) {
    let due = due_today(habits, date);
    let completed = due.iter().filter(|habit| is_completed_on(habit, date)).count();
    (completed, due.len())
}

/// Colour for the `index`-th habit, cycling through the palette.
pub fn color_for(index: usize) -> &'static str {
    HABIT_COLORS[index % HABIT_COLORS.len()]
}

/// Builds a habit from a preset; the caller passes it to `Collection::add`.
pub fn from_suggestion(
    id: EntityId,
    suggestion: &HabitSuggestion,
    existing: usize,
    created_at: DateTime<Utc>,
) -> Habit {
    let mut habit = Habit::new(id, suggestion.name, suggestion.frequency, created_at);
    habit.description = suggestion.description.to_string();
    habit.goal = Some(suggestion.goal);
    habit.unit = Some(suggestion.unit.to_string());
    habit.color = color_for(existing).to_string();
    habit
}

pub fn suggestions() -> &'static [HabitSuggestion] {
    HABIT_SUGGESTIONS
}
