//! Weekly timetable views and the dated overview calendar.

use super::weekday_index;
use crate::model::area::LifeArea;
use crate::model::schedule::{ScheduleEvent, ScheduleItem};
use crate::model::task::Task;
use chrono::NaiveDate;

/// By weekday, then by `HH:MM` start time.
pub fn sort_events<'a>(
    events: impl IntoIterator<Item = &'a ScheduleEvent>,
) -> Vec<&'a ScheduleEvent> {
    let mut sorted: Vec<&ScheduleEvent> = events.into_iter().collect();
    sorted.sort_by(|left, right| {
        left.day
            .cmp(&right.day)
            .then_with(|| left.start_time.cmp(&right.start_time))
    });
    sorted
}

/// Events on weekday `day` (Sunday = 0), by start time.
pub fn events_on<'a>(
    events: impl IntoIterator<Item = &'a ScheduleEvent>,
    day: u8,
) -> Vec<&'a ScheduleEvent> {
    sort_events(events)
        .into_iter()
        .filter(|event| event.day == day)
        .collect()
}

/// Seven buckets indexed by weekday, each sorted by start time.
pub fn group_by_day<'a>(
    events: impl IntoIterator<Item = &'a ScheduleEvent>,
) -> [Vec<&'a ScheduleEvent>; 7] {
    let mut days: [Vec<&ScheduleEvent>; 7] = Default::default();
    for event in sort_events(events) {
        if let Some(bucket) = days.get_mut(usize::from(event.day)) {
            bucket.push(event);
        }
    }
    days
}

/// Count of timetable events on `date`'s weekday.
pub fn events_on_date(events: &[ScheduleEvent], date: NaiveDate) -> usize {
    let day = weekday_index(&date);
    events.iter().filter(|event| event.day == day).count()
}

/// Entry shown in one overview calendar cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverviewItem<'a> {
    Task(&'a Task),
    Scheduled(&'a ScheduleItem),
}

impl OverviewItem<'_> {
    pub fn area(&self) -> Option<&LifeArea> {
        match self {
            Self::Task(task) => task.area.as_ref(),
            Self::Scheduled(item) => item.area.as_ref(),
        }
    }
}

/// Tasks due on `date` followed by schedule items starting on `date`.
pub fn overview_items<'a>(
    tasks: &'a [Task],
    items: &'a [ScheduleItem],
    date: NaiveDate,
) -> Vec<OverviewItem<'a>> {
    let due = tasks
        .iter()
        .filter(|task| task.due_date.is_some_and(|due| due.date_naive() == date))
        .map(OverviewItem::Task);
    let scheduled = items
        .iter()
        .filter(|item| item.start_time.date_naive() == date)
        .map(OverviewItem::Scheduled);
    due.chain(scheduled).collect()
}

/// Area used to highlight a calendar cell: personal, then university,
/// then tutoring; `None` for untagged or empty cells.
pub fn day_highlight(items: &[OverviewItem<'_>]) -> Option<LifeArea> {
    LifeArea::SECTIONS
        .into_iter()
        .find(|area| items.iter().any(|item| item.area() == Some(area)))
}
