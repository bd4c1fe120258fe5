//! In-memory collection value and its JSON codec.
//!
//! # Invariants
//! - `add` assigns an id no other record in the collection carries.
//! - `update` and `remove` on an unknown id return the input unchanged.
//! - `update` keeps the record's id whatever the closure returns.
//! - Decoding revives exactly the fields listed in `Entity::DATE_FIELDS`.

use super::ids::IdGenerator;
use super::{StoreError, StoreResult};
use crate::model::entity::{Entity, EntityId};
use crate::model::iso8601;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every record of one entity type, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records as read from storage; ids are taken verbatim.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Appends the record built from a fresh id and returns it alongside.
    pub fn add(self, build: impl FnOnce(EntityId) -> T) -> (Self, T) {
        self.add_with(IdGenerator::shared(), build)
    }

    /// [`Collection::add`] with an explicit id source.
    pub fn add_with(mut self, ids: &IdGenerator, build: impl FnOnce(EntityId) -> T) -> (Self, T) {
        let id = ids.next_unused(|candidate| self.contains(candidate));
        let mut record = build(id.clone());
        record.set_id(id);
        self.records.push(record.clone());
        (self, record)
    }

    /// Replaces the record `id` with `apply(record)`.
    pub fn update(mut self, id: &EntityId, apply: impl FnOnce(T) -> T) -> Self {
        if let Some(slot) = self.records.iter_mut().find(|record| record.id() == id) {
            let mut next = apply(slot.clone());
            next.set_id(id.clone());
            *slot = next;
        }
        self
    }

    /// Drops the record `id`.
    pub fn remove(mut self, id: &EntityId) -> Self {
        self.records.retain(|record| record.id() != id);
        self
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Serializes the whole collection to its stored JSON form.
pub fn encode_collection<T: Entity>(collection: &Collection<T>) -> StoreResult<String> {
    serde_json::to_string(collection).map_err(StoreError::Encode)
}

/// Parses a stored blob and revives its date fields.
pub fn decode_collection<T: Entity>(raw: &str) -> StoreResult<Collection<T>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| decode_error::<T>(err.to_string()))?;
    revive_dates(value)
}

/// Converts the declared date fields of every record and decodes the
/// typed collection.
///
/// Date strings are normalized to the canonical encoding; empty strings
/// and `null` become `None`; `null` entries inside date arrays are dropped.
pub fn revive_dates<T: Entity>(mut raw: Value) -> StoreResult<Collection<T>> {
    let records = raw
        .as_array_mut()
        .ok_or_else(|| decode_error::<T>("expected a JSON array".to_string()))?;

    for (index, record) in records.iter_mut().enumerate() {
        let fields = record
            .as_object_mut()
            .ok_or_else(|| decode_error::<T>(format!("record {index} is not an object")))?;
        for field in T::DATE_FIELDS {
            if let Some(value) = fields.get_mut(*field) {
                revive_date_value(value).map_err(|message| {
                    decode_error::<T>(format!("record {index} field `{field}`: {message}"))
                })?;
            }
        }
    }

    let records: Vec<T> =
        serde_json::from_value(raw).map_err(|err| decode_error::<T>(err.to_string()))?;
    Ok(Collection::from_records(records))
}

fn revive_date_value(value: &mut Value) -> Result<(), String> {
    if value.as_str().is_some_and(|raw| raw.trim().is_empty()) {
        *value = Value::Null;
        return Ok(());
    }

    match value {
        Value::Null => Ok(()),
        Value::String(raw) => {
            let parsed = iso8601::parse(raw)?;
            *raw = iso8601::format(&parsed);
            Ok(())
        }
        Value::Array(items) => {
            items.retain(|item| !item.is_null());
            items.iter_mut().try_for_each(revive_date_value)
        }
        other => Err(format!("expected an ISO-8601 string, got `{other}`")),
    }
}

fn decode_error<T: Entity>(message: String) -> StoreError {
    StoreError::Decode {
        key: T::COLLECTION_KEY.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_collection, encode_collection, revive_dates, Collection};
    use crate::model::entity::EntityId;
    use crate::model::habit::Habit;
    use crate::model::task::{Priority, Task};
    use crate::store::{IdGenerator, StoreError};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn add_assigns_fresh_id_and_keeps_existing_records() {
        let ids = IdGenerator::new();
        let (tasks, first) =
            Collection::new().add_with(&ids, |id| Task::new(id, "first", Priority::Low));
        let (tasks, second) =
            tasks.add_with(&ids, |id| Task::new(id, "second", Priority::High));

        assert_ne!(first.id, second.id);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.records()[0], first);
        assert_eq!(tasks.get(&second.id), Some(&second));
    }

    #[test]
    fn update_cannot_change_the_record_id() {
        let (tasks, task) = Collection::new().add(|id| Task::new(id, "draft", Priority::Low));
        let tasks = tasks.update(&task.id, |mut task| {
            task.id = EntityId::from("hijacked");
            task.text = "final".to_string();
            task
        });
        assert_eq!(tasks.records()[0].id, task.id);
        assert_eq!(tasks.records()[0].text, "final");
    }

    #[test]
    fn revive_normalizes_dates_and_nulls() {
        let raw = json!([{
            "id": "1",
            "text": "Submit report",
            "completed": false,
            "dueDate": "2024-05-02T09:15:00+02:00",
            "priority": "high",
            "area": "university"
        }, {
            "id": "2",
            "text": "Someday",
            "completed": false,
            "dueDate": "",
            "priority": "low"
        }]);

        let tasks = revive_dates::<Task>(raw).unwrap();
        assert_eq!(
            tasks.records()[0].due_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 2, 7, 15, 0).unwrap())
        );
        assert_eq!(tasks.records()[1].due_date, None);
    }

    #[test]
    fn revive_handles_date_arrays() {
        let raw = json!([{
            "id": "h1",
            "name": "Read",
            "frequency": "daily",
            "completedDates": ["2024-05-01T20:00:00.000Z", null, "2024-05-02"],
            "createdAt": "2024-04-30T08:00:00.000Z"
        }]);

        let habits = revive_dates::<Habit>(raw).unwrap();
        assert_eq!(habits.records()[0].completed_dates.len(), 2);
    }

    #[test]
    fn revive_reports_the_offending_field() {
        let raw = json!([{ "id": "1", "text": "x", "dueDate": 42, "priority": "low" }]);
        match revive_dates::<Task>(raw).unwrap_err() {
            StoreError::Decode { key, message } => {
                assert_eq!(key, "todos");
                assert!(message.contains("dueDate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn encoded_dates_use_browser_iso_form() {
        let (tasks, _) = Collection::new().add(|id| {
            let mut task = Task::new(id, "dated", Priority::Medium);
            task.due_date = Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
            task
        });
        let encoded = encode_collection(&tasks).unwrap();
        assert!(encoded.contains("\"dueDate\":\"2024-01-02T03:04:05.000Z\""));
        assert_eq!(decode_collection::<Task>(&encoded).unwrap(), tasks);
    }

    #[test]
    fn decode_rejects_non_array_blobs() {
        assert!(decode_collection::<Task>("{\"id\":\"1\"}").is_err());
        assert!(decode_collection::<Task>("not json").is_err());
    }
}
