//! One mood entry per calendar day.

use crate::model::entity::EntityId;
use crate::model::iso8601;
use crate::model::mood::MoodEntry;
use crate::store::Collection;
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Emoji palette offered by the mood picker.
pub const MOOD_OPTIONS: &[(&str, &str)] = &[
    ("😀", "Happy"),
    ("😊", "Content"),
    ("😐", "Neutral"),
    ("😔", "Sad"),
    ("😠", "Angry"),
    ("😰", "Anxious"),
    ("😴", "Tired"),
    ("🤒", "Sick"),
    ("💪", "Energetic"),
    ("🥳", "Excited"),
];

pub fn mood_label(emoji: &str) -> Option<&'static str> {
    MOOD_OPTIONS
        .iter()
        .find(|(option, _)| *option == emoji)
        .map(|(_, label)| *label)
}

pub fn entry_on(entries: &[MoodEntry], date: NaiveDate) -> Option<&MoodEntry> {
    entries.iter().find(|entry| entry.date.date_naive() == date)
}

/// Records the mood for `date`'s day, replacing an existing entry of that
/// day in place (keeping its id) or appending a new one.
pub fn upsert_for_date(
    entries: Collection<MoodEntry>,
    date: DateTime<Utc>,
    mood: &str,
    note: &str,
) -> (Collection<MoodEntry>, MoodEntry) {
    let existing = entry_on(entries.records(), date.date_naive()).map(|entry| entry.id.clone());
    let date = iso8601::truncate(date);
    let build = |id: EntityId| MoodEntry {
        id,
        date,
        mood: mood.to_string(),
        note: note.to_string(),
    };

    match existing {
        Some(id) => {
            let entry = build(id.clone());
            let replacement = entry.clone();
            (entries.update(&id, move |_| replacement), entry)
        }
        None => entries.add(build),
    }
}

/// Entries dated from 6 days before `today` through `today`.
pub fn past_week(entries: &[MoodEntry], today: NaiveDate) -> Vec<&MoodEntry> {
    let start = today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);
    entries
        .iter()
        .filter(|entry| {
            let day = entry.date.date_naive();
            day >= start && day <= today
        })
        .collect()
}
