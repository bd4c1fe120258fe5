//! Identity and persistence contracts shared by every widget record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque record identifier, unique within one collection.
///
/// Newly created ids are decimal epoch-millisecond strings; ids read from
/// storage are kept verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A record stored as one element of a named collection.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Local store key owning the whole collection.
    const COLLECTION_KEY: &'static str;
    /// JSON fields holding ISO-8601 date-times (scalar or array).
    const DATE_FIELDS: &'static [&'static str];

    fn id(&self) -> &EntityId;
    fn set_id(&mut self, id: EntityId);
}

/// A single settings-like value stored under its own key.
pub trait Document: Serialize + DeserializeOwned + Default {
    const DOCUMENT_KEY: &'static str;
}

/// Implements [`Entity`] for a record type with an `id: EntityId` field.
macro_rules! impl_entity {
    ($ty:ty, $key:literal, [$($field:literal),* $(,)?]) => {
        impl $crate::model::entity::Entity for $ty {
            const COLLECTION_KEY: &'static str = $key;
            const DATE_FIELDS: &'static [&'static str] = &[$($field),*];

            fn id(&self) -> &$crate::model::entity::EntityId {
                &self.id
            }

            fn set_id(&mut self, id: $crate::model::entity::EntityId) {
                self.id = id;
            }
        }
    };
}

/// Implements [`crate::model::area::AreaTagged`] for a record with an
/// `area: Option<LifeArea>` field.
macro_rules! impl_area_tagged {
    ($ty:ty) => {
        impl $crate::model::area::AreaTagged for $ty {
            fn life_area(&self) -> Option<&$crate::model::area::LifeArea> {
                self.area.as_ref()
            }
        }
    };
}

pub(crate) use impl_area_tagged;
pub(crate) use impl_entity;
