//! Typed load/save of collections and documents over a [`KeyValueStore`].

use super::collection::{decode_collection, encode_collection, Collection};
use super::kv::KeyValueStore;
use super::{StoreError, StoreResult};
use crate::logging::sanitize_message;
use crate::model::entity::{Document, Entity};
use log::{debug, warn};

const MAX_DECODE_MESSAGE_CHARS: usize = 200;

/// Collection mirror with parse-or-empty loads.
///
/// Corrupt blobs are left in place; the next save overwrites them.
pub struct LocalStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Loads the collection stored under `T::COLLECTION_KEY`.
    pub fn load<T: Entity>(&self) -> StoreResult<Collection<T>> {
        self.load_key(T::COLLECTION_KEY)
    }

    /// Loads a collection stored under an explicit key.
    ///
    /// # Errors
    /// Only substrate read failures. Absent and malformed blobs load as
    /// an empty collection.
    pub fn load_key<T: Entity>(&self, key: &str) -> StoreResult<Collection<T>> {
        let Some(raw) = self.backend.get_item(key)? else {
            debug!("event=store_load module=store status=absent key={key}");
            return Ok(Collection::default());
        };

        match decode_collection::<T>(&raw) {
            Ok(collection) => {
                debug!(
                    "event=store_load module=store status=ok key={key} records={}",
                    collection.len()
                );
                Ok(collection)
            }
            Err(err) => {
                log_recovered(key, raw.len(), &err);
                Ok(Collection::default())
            }
        }
    }

    /// Overwrites the blob under `T::COLLECTION_KEY` with the full collection.
    pub fn save<T: Entity>(&self, collection: &Collection<T>) -> StoreResult<()> {
        self.save_key(T::COLLECTION_KEY, collection)
    }

    pub fn save_key<T: Entity>(&self, key: &str, collection: &Collection<T>) -> StoreResult<()> {
        let encoded = encode_collection(collection)?;
        self.backend.set_item(key, &encoded)?;
        debug!(
            "event=store_save module=store status=ok key={key} records={}",
            collection.len()
        );
        Ok(())
    }

    /// Loads, applies `mutate`, saves and returns the collection as stored.
    ///
    /// The returned value is decoded from the written blob, so it equals the
    /// next [`LocalStore::load`].
    pub fn mutate<T: Entity>(
        &self,
        mutate: impl FnOnce(Collection<T>) -> Collection<T>,
    ) -> StoreResult<Collection<T>> {
        let next = mutate(self.load::<T>()?);
        let encoded = encode_collection(&next)?;
        self.backend.set_item(T::COLLECTION_KEY, &encoded)?;
        debug!(
            "event=store_mutate module=store status=ok key={} records={}",
            T::COLLECTION_KEY,
            next.len()
        );
        decode_collection(&encoded)
    }

    /// Loads a settings document; absent or malformed values give the default.
    pub fn load_document<D: Document>(&self) -> StoreResult<D> {
        let key = D::DOCUMENT_KEY;
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(D::default());
        };

        match serde_json::from_str::<D>(&raw) {
            Ok(document) => Ok(document),
            Err(err) => {
                let err = StoreError::Decode {
                    key: key.to_string(),
                    message: err.to_string(),
                };
                log_recovered(key, raw.len(), &err);
                Ok(D::default())
            }
        }
    }

    pub fn save_document<D: Document>(&self, document: &D) -> StoreResult<()> {
        let encoded = serde_json::to_string(document).map_err(StoreError::Encode)?;
        self.backend.set_item(D::DOCUMENT_KEY, &encoded)
    }

    /// Drops every stored collection and document.
    pub fn clear_all(&self) -> StoreResult<()> {
        self.backend.clear()?;
        debug!("event=store_clear module=store status=ok");
        Ok(())
    }
}

fn log_recovered(key: &str, blob_len: usize, err: &StoreError) {
    warn!(
        "event=store_load module=store status=recovered key={key} blob_len={blob_len} error={}",
        sanitize_message(&err.to_string(), MAX_DECODE_MESSAGE_CHARS)
    );
}
