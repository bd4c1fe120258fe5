//! Dashboard quick stats joined across widget collections.
//!
//! # Invariants
//! - Read-only: computing stats never writes to the store.
//! - Area counts only include records tagged with one of the three
//!   dashboard sections.

use super::{habits, reminders, tasks, water, weekday_index};
use crate::model::area::LifeArea;
use crate::model::habit::Habit;
use crate::model::reminder::Reminder;
use crate::model::schedule::ScheduleEvent;
use crate::model::settings::CompletedPomodoros;
use crate::model::task::Task;
use crate::model::water::WaterLog;
use crate::store::{KeyValueStore, LocalStore, StoreResult};
use chrono::{DateTime, Utc};

/// Per-area counters shown under each dashboard section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaStats {
    pub tasks: usize,
    /// Timetable events on today's weekday.
    pub events: usize,
    /// Habits due today.
    pub habits: usize,
    /// Enabled reminders scheduled today.
    pub reminders: usize,
}

/// Collections the quick stats are computed from.
#[derive(Debug, Clone, Copy)]
pub struct StatsInputs<'a> {
    pub tasks: &'a [Task],
    pub events: &'a [ScheduleEvent],
    pub reminders: &'a [Reminder],
    pub habits: &'a [Habit],
    pub water_logs: &'a [WaterLog],
    pub completed_pomodoros: CompletedPomodoros,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickStats {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub today_events: usize,
    pub active_reminders: usize,
    /// Millilitres.
    pub water_intake: f64,
    pub completed_habits: usize,
    pub total_habits: usize,
    pub completed_pomodoros: u32,
    pub personal: AreaStats,
    pub university: AreaStats,
    pub tutoring: AreaStats,
}

impl QuickStats {
    pub fn compute(inputs: &StatsInputs<'_>, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let weekday = weekday_index(&now);

        let (completed_tasks, total_tasks) = tasks::completion_counts(inputs.tasks);
        let todays_events: Vec<&ScheduleEvent> = inputs
            .events
            .iter()
            .filter(|event| event.day == weekday)
            .collect();
        let active_reminders: Vec<&Reminder> = reminders::due_today(inputs.reminders, now)
            .into_iter()
            .filter(|reminder| reminder.enabled)
            .collect();
        let todays_habits = habits::due_today(inputs.habits, today);
        let completed_habits = todays_habits
            .iter()
            .filter(|habit| habits::is_completed_on(habit, today))
            .count();

        let mut stats = Self {
            completed_tasks,
            total_tasks,
            today_events: todays_events.len(),
            active_reminders: active_reminders.len(),
            water_intake: water::intake_on(inputs.water_logs, today),
            completed_habits,
            total_habits: todays_habits.len(),
            completed_pomodoros: inputs.completed_pomodoros.0,
            personal: AreaStats::default(),
            university: AreaStats::default(),
            tutoring: AreaStats::default(),
        };

        for task in inputs.tasks {
            if let Some(area) = stats.area_mut(task.area.as_ref()) {
                area.tasks += 1;
            }
        }
        for event in todays_events {
            if let Some(area) = stats.area_mut(event.area.as_ref()) {
                area.events += 1;
            }
        }
        for habit in todays_habits {
            if let Some(area) = stats.area_mut(habit.area.as_ref()) {
                area.habits += 1;
            }
        }
        for reminder in active_reminders {
            if let Some(area) = stats.area_mut(reminder.area.as_ref()) {
                area.reminders += 1;
            }
        }
        stats
    }

    /// Loads every input collection from `store` and computes the stats.
    pub fn load<S: KeyValueStore>(store: &LocalStore<S>, now: DateTime<Utc>) -> StoreResult<Self> {
        let tasks = store.load::<Task>()?;
        let events = store.load::<ScheduleEvent>()?;
        let reminders = store.load::<Reminder>()?;
        let habits = store.load::<Habit>()?;
        let water_logs = store.load::<WaterLog>()?;
        let completed_pomodoros = store.load_document::<CompletedPomodoros>()?;

        Ok(Self::compute(
            &StatsInputs {
                tasks: tasks.records(),
                events: events.records(),
                reminders: reminders.records(),
                habits: habits.records(),
                water_logs: water_logs.records(),
                completed_pomodoros,
            },
            now,
        ))
    }

    /// Counters for one dashboard section; `None` for custom areas.
    pub fn area(&self, area: &LifeArea) -> Option<AreaStats> {
        match area {
            LifeArea::Personal => Some(self.personal),
            LifeArea::University => Some(self.university),
            LifeArea::Tutoring => Some(self.tutoring),
            LifeArea::Custom(_) => None,
        }
    }

    fn area_mut(&mut self, area: Option<&LifeArea>) -> Option<&mut AreaStats> {
        match area? {
            LifeArea::Personal => Some(&mut self.personal),
            LifeArea::University => Some(&mut self.university),
            LifeArea::Tutoring => Some(&mut self.tutoring),
            LifeArea::Custom(_) => None,
        }
    }
}
