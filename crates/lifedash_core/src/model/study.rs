//! Study topics (`study-topics`) and study resources (`study-resources`).

use crate::model::entity::{impl_entity, EntityId};
use crate::model::task::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTopic {
    pub id: EntityId,
    pub name: String,
    pub subject: String,
    #[serde(default)]
    pub has_notes: bool,
    #[serde(default)]
    pub has_anki_cards: bool,
    #[serde(default)]
    pub notes: String,
    pub priority: Priority,
}

impl_entity!(StudyTopic, "study-topics", []);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Textbook,
    Article,
    Video,
    Notes,
    Flashcards,
    Quiz,
    Link,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyResource {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl_entity!(StudyResource, "study-resources", []);
