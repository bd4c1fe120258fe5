//! Whole-collection persistence over a string-keyed local store.
//!
//! # Responsibility
//! - Mirror each widget collection as one JSON blob under a fixed key.
//! - Isolate the "trust nothing from storage" policy in one decode step.
//!
//! # Invariants
//! - Absent or corrupt blobs load as empty collections; only substrate
//!   failures surface as errors.
//! - Saves always write the full collection, never a delta.
//! - Concurrent writers are last-write-wins per key.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod collection;
pub mod ids;
pub mod kv;
mod local_store;

pub use collection::{decode_collection, encode_collection, revive_dates, Collection};
pub use ids::IdGenerator;
pub use kv::{KeyValueStore, MemoryKvStore, SqliteKvStore};
pub use local_store::LocalStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// SQLite substrate failure.
    Sqlite(rusqlite::Error),
    /// A collection or document could not be serialized.
    Encode(serde_json::Error),
    /// A stored blob does not match the expected shape.
    Decode { key: String, message: String },
    /// Non-SQLite substrate failure.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::Decode { key, message } => {
                write!(f, "stored value under `{key}` is malformed: {message}")
            }
            Self::Backend(message) => write!(f, "local store failure: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode { .. } | Self::Backend(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
