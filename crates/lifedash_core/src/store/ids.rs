//! Time-based record identifiers.

use crate::model::entity::EntityId;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static SHARED: IdGenerator = IdGenerator::new();

/// Hands out epoch-millisecond ids, strictly increasing per generator.
///
/// Two calls within the same millisecond get consecutive values, so ids
/// stay unique even in bulk inserts.
#[derive(Debug)]
pub struct IdGenerator {
    last_ms: AtomicI64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            last_ms: AtomicI64::new(0),
        }
    }

    /// Process-wide generator used by [`crate::store::Collection::add`].
    pub fn shared() -> &'static IdGenerator {
        &SHARED
    }

    /// Next value at or after `now_ms` and above every earlier value.
    pub fn next_after(&self, now_ms: i64) -> i64 {
        let mut last = self.last_ms.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match self.last_ms.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }

    pub fn next_id(&self) -> EntityId {
        EntityId::new(self.next_after(Utc::now().timestamp_millis()).to_string())
    }

    /// Next id for which `taken` is false.
    pub fn next_unused(&self, taken: impl Fn(&EntityId) -> bool) -> EntityId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
