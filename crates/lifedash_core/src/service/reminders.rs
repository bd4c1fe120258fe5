//! Reminder ordering, weekday matching and firing rules.

use super::weekday_index;
use crate::model::entity::EntityId;
use crate::model::iso8601;
use crate::model::reminder::Reminder;
use crate::store::Collection;
use chrono::{DateTime, Utc};

/// Stored order sorted by `HH:MM` (zero-padded, so lexical order is time order).
pub fn sort_by_time<'a>(reminders: impl IntoIterator<Item = &'a Reminder>) -> Vec<&'a Reminder> {
    let mut sorted: Vec<&Reminder> = reminders.into_iter().collect();
    sorted.sort_by(|left, right| left.time.cmp(&right.time));
    sorted
}

/// Reminders scheduled on `now`'s weekday, by time.
pub fn due_today<'a>(
    reminders: impl IntoIterator<Item = &'a Reminder>,
    now: DateTime<Utc>,
) -> Vec<&'a Reminder> {
    let today = weekday_index(&now);
    sort_by_time(reminders)
        .into_iter()
        .filter(|reminder| reminder.days.contains(&today))
        .collect()
}

pub fn toggle_enabled(reminders: Collection<Reminder>, id: &EntityId) -> Collection<Reminder> {
    reminders.update(id, |mut reminder| {
        reminder.enabled = !reminder.enabled;
        reminder
    })
}

pub fn mark_completed(
    reminders: Collection<Reminder>,
    id: &EntityId,
    now: DateTime<Utc>,
) -> Collection<Reminder> {
    reminders.update(id, |mut reminder| {
        reminder.last_completed = Some(iso8601::truncate(now));
        reminder
    })
}

pub fn is_completed_today(reminder: &Reminder, now: DateTime<Utc>) -> bool {
    reminder
        .last_completed
        .is_some_and(|completed| completed.date_naive() == now.date_naive())
}

/// Whether a notification is due at `now` (minute resolution).
pub fn should_fire(reminder: &Reminder, now: DateTime<Utc>) -> bool {
    reminder.enabled
        && reminder.days.contains(&weekday_index(&now))
        && reminder.time == now.format("%H:%M").to_string()
        && !is_completed_today(reminder, now)
}

/// Toggles `day` in a weekday selection, keeping it sorted.
pub fn toggle_day(days: &[u8], day: u8) -> Vec<u8> {
    let mut next: Vec<u8> = days.iter().copied().filter(|existing| *existing != day).collect();
    if next.len() == days.len() {
        next.push(day);
        next.sort_unstable();
    }
    next
}

pub fn active_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|reminder| reminder.enabled).count()
}

#[cfg(test)]
mod tests {
    use super::{due_today, mark_completed, should_fire, toggle_day, toggle_enabled};
    use crate::model::entity::EntityId;
    use crate::model::reminder::{Reminder, ReminderKind};
    use crate::store::Collection;
    use chrono::{DateTime, TimeZone, Utc};

    fn reminder(id: &str, time: &str, days: Vec<u8>) -> Reminder {
        Reminder {
            id: EntityId::from(id),
            title: format!("reminder {id}"),
            kind: ReminderKind::Supplement,
            time: time.to_string(),
            days,
            enabled: true,
            last_completed: None,
            area: None,
        }
    }

    fn tuesday(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 7, hour, minute, 0).unwrap()
    }

    #[test]
    fn today_list_is_time_ordered() {
        let reminders = vec![
            reminder("late", "21:00", vec![2]),
            reminder("early", "07:30", vec![1, 2]),
            reminder("monday", "06:00", vec![1]),
        ];
        let ids: Vec<&str> = due_today(&reminders, tuesday(12, 0))
            .into_iter()
            .map(|reminder| reminder.id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn fires_once_per_day_at_its_minute() {
        let id = EntityId::from("1");
        let reminders = Collection::from_records(vec![reminder("1", "08:15", vec![2])]);
        assert!(should_fire(&reminders.records()[0], tuesday(8, 15)));
        assert!(!should_fire(&reminders.records()[0], tuesday(8, 16)));

        let completed = mark_completed(reminders.clone(), &id, tuesday(8, 15));
        assert!(!should_fire(&completed.records()[0], tuesday(8, 15)));

        let disabled = toggle_enabled(reminders, &id);
        assert!(!should_fire(&disabled.records()[0], tuesday(8, 15)));
    }

    #[test]
    fn toggle_day_keeps_selection_sorted() {
        assert_eq!(toggle_day(&[1, 5], 3), vec![1, 3, 5]);
        assert_eq!(toggle_day(&[1, 3, 5], 3), vec![1, 5]);
    }
}
