//! Sleep duration and weekly average.

use crate::model::sleep::SleepEntry;
use chrono::{DateTime, Days, Utc};

/// Whole minutes between falling asleep and waking.
pub fn duration_minutes(entry: &SleepEntry) -> i64 {
    (entry.wake_time - entry.sleep_time).num_minutes()
}

/// Mean duration of entries that started on or after `since`; `None` without any.
pub fn average_minutes_since(entries: &[SleepEntry], since: DateTime<Utc>) -> Option<f64> {
    let recent: Vec<i64> = entries
        .iter()
        .filter(|entry| entry.sleep_time >= since)
        .map(duration_minutes)
        .collect();
    if recent.is_empty() {
        return None;
    }
    Some(recent.iter().sum::<i64>() as f64 / recent.len() as f64)
}

/// Average over the 7 days before `now`.
pub fn weekly_average_minutes(entries: &[SleepEntry], now: DateTime<Utc>) -> Option<f64> {
    let since = now.checked_sub_days(Days::new(7))?;
    average_minutes_since(entries, since)
}

/// Most recent night first.
pub fn recent_first(entries: &[SleepEntry]) -> Vec<&SleepEntry> {
    let mut sorted: Vec<&SleepEntry> = entries.iter().collect();
    sorted.sort_by(|left, right| right.sleep_time.cmp(&left.sleep_time));
    sorted
}

/// `(hours, minutes)` for display.
pub fn split_hours(minutes: i64) -> (i64, i64) {
    (minutes / 60, minutes % 60)
}
