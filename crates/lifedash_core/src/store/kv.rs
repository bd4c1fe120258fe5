//! String-keyed, string-valued substrates behind [`super::LocalStore`].

use super::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Durable key-value substrate, the shape of a browser profile's local
/// storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
    /// Sorted list of stored keys.
    fn keys(&self) -> StoreResult<Vec<String>>;
    /// Drops every key.
    fn clear(&self) -> StoreResult<()>;
}

/// Process-local substrate for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> StoreResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.items()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.items()?.keys().cloned().collect())
    }

    fn clear(&self) -> StoreResult<()> {
        self.items()?.clear();
        Ok(())
    }
}

/// SQLite-backed substrate over the `local_store` table.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection opened through [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKvStore<'_> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO local_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM local_store WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM local_store;", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKvStore, SqliteKvStore};
    use crate::db::open_db_in_memory;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get_item("todos").unwrap(), None);

        store.set_item("todos", "[]").unwrap();
        store.set_item("habits", "[1]").unwrap();
        store.set_item("todos", "[2]").unwrap();
        assert_eq!(store.get_item("todos").unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.keys().unwrap(), vec!["habits", "todos"]);

        store.remove_item("habits").unwrap();
        store.remove_item("missing").unwrap();
        assert_eq!(store.keys().unwrap(), vec!["todos"]);

        store.clear().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn memory_store_behaves_like_local_storage() {
        exercise(&MemoryKvStore::new());
    }

    #[test]
    fn sqlite_store_behaves_like_local_storage() {
        let conn = open_db_in_memory().unwrap();
        exercise(&SqliteKvStore::new(&conn));
    }
}
