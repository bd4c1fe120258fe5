//! Study topic and study resource views.

use crate::model::entity::EntityId;
use crate::model::study::{ResourceKind, StudyResource, StudyTopic};
use crate::model::validation::{require_text, ValidationError};
use crate::store::Collection;
use std::collections::BTreeSet;

/// Topics whose name or notes contain `query` (case-insensitive), limited
/// to `subject` when given, highest priority first.
pub fn search_topics<'a>(
    topics: &'a [StudyTopic],
    query: &str,
    subject: Option<&str>,
) -> Vec<&'a StudyTopic> {
    let needle = query.trim().to_lowercase();
    let mut matches: Vec<&StudyTopic> = topics
        .iter()
        .filter(|topic| {
            needle.is_empty()
                || topic.name.to_lowercase().contains(&needle)
                || topic.notes.to_lowercase().contains(&needle)
        })
        .filter(|topic| subject.map_or(true, |subject| topic.subject == subject))
        .collect();
    matches.sort_by_key(|topic| topic.priority.rank());
    matches
}

/// Sorted, de-duplicated subject names.
pub fn unique_subjects(topics: &[StudyTopic]) -> Vec<&str> {
    topics
        .iter()
        .map(|topic| topic.subject.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicProgress {
    pub total: usize,
    pub with_notes: usize,
    pub with_anki_cards: usize,
}

pub fn topic_progress(topics: &[StudyTopic]) -> TopicProgress {
    TopicProgress {
        total: topics.len(),
        with_notes: topics.iter().filter(|topic| topic.has_notes).count(),
        with_anki_cards: topics.iter().filter(|topic| topic.has_anki_cards).count(),
    }
}

/// Resource list filter; empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Matched against title, description, course and tags.
    pub query: String,
    pub kind: Option<ResourceKind>,
    pub course: Option<String>,
    pub favorites_only: bool,
}

impl ResourceFilter {
    pub fn matches(&self, resource: &StudyResource) -> bool {
        let needle = self.query.trim().to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);
        let matches_query = needle.is_empty()
            || contains(&resource.title)
            || resource.description.as_deref().is_some_and(contains)
            || resource.course.as_deref().is_some_and(contains)
            || resource
                .tags
                .as_deref()
                .is_some_and(|tags| tags.iter().any(|tag| contains(tag)));

        matches_query
            && self.kind.map_or(true, |kind| resource.kind == kind)
            && self
                .course
                .as_deref()
                .map_or(true, |course| resource.course.as_deref() == Some(course))
            && (!self.favorites_only || resource.favorite)
    }
}

/// Matching resources, favorites first, otherwise in stored order.
pub fn filter_resources<'a>(
    resources: &'a [StudyResource],
    filter: &ResourceFilter,
) -> Vec<&'a StudyResource> {
    let mut matches: Vec<&StudyResource> = resources
        .iter()
        .filter(|resource| filter.matches(resource))
        .collect();
    matches.sort_by_key(|resource| !resource.favorite);
    matches
}

pub fn toggle_favorite(
    resources: Collection<StudyResource>,
    id: &EntityId,
) -> Collection<StudyResource> {
    resources.update(id, |mut resource| {
        resource.favorite = !resource.favorite;
        resource
    })
}

/// Sorted, de-duplicated non-empty course names.
pub fn unique_courses(resources: &[StudyResource]) -> Vec<&str> {
    resources
        .iter()
        .filter_map(|resource| resource.course.as_deref())
        .filter(|course| !course.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Kinds that point at external material and need a URL.
pub fn requires_url(kind: ResourceKind) -> bool {
    matches!(
        kind,
        ResourceKind::Textbook | ResourceKind::Article | ResourceKind::Video | ResourceKind::Link
    )
}

pub fn validate_resource(resource: &StudyResource) -> Result<(), ValidationError> {
    require_text("title", &resource.title)?;
    if requires_url(resource.kind) {
        require_text("url", resource.url.as_deref().unwrap_or_default())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        filter_resources, search_topics, topic_progress, unique_subjects, validate_resource,
        ResourceFilter,
    };
    use crate::model::entity::EntityId;
    use crate::model::study::{ResourceKind, StudyResource, StudyTopic};
    use crate::model::task::Priority;

    fn topic(id: &str, subject: &str, notes: &str, priority: Priority) -> StudyTopic {
        StudyTopic {
            id: EntityId::from(id),
            name: id.to_string(),
            subject: subject.to_string(),
            has_notes: !notes.is_empty(),
            has_anki_cards: false,
            notes: notes.to_string(),
            priority,
        }
    }

    fn resource(id: &str, kind: ResourceKind, favorite: bool, tags: &[&str]) -> StudyResource {
        StudyResource {
            id: EntityId::from(id),
            title: id.to_string(),
            kind,
            url: None,
            course: Some("Biology".to_string()),
            description: None,
            favorite,
            tags: Some(tags.iter().map(|tag| tag.to_string()).collect()),
        }
    }

    #[test]
    fn topic_search_covers_name_and_notes() {
        let topics = vec![
            topic("Cell division", "Biology", "", Priority::Low),
            topic("Integrals", "Maths", "see MITOSIS chapter", Priority::High),
            topic("Mitosis", "Biology", "", Priority::Medium),
        ];
        let found: Vec<&str> = search_topics(&topics, "mitosis", None)
            .into_iter()
            .map(|topic| topic.name.as_str())
            .collect();
        assert_eq!(found, vec!["Integrals", "Mitosis"]);
        assert_eq!(search_topics(&topics, "", Some("Biology")).len(), 2);
        assert_eq!(unique_subjects(&topics), vec!["Biology", "Maths"]);
        assert_eq!(topic_progress(&topics).with_notes, 1);
    }

    #[test]
    fn resource_filter_combines_criteria() {
        let resources = vec![
            resource("Campbell", ResourceKind::Textbook, false, &["genetics"]),
            resource("Crash course", ResourceKind::Video, true, &[]),
            resource("Deck", ResourceKind::Flashcards, false, &["Genetics"]),
        ];

        let by_tag = ResourceFilter {
            query: "GENETICS".to_string(),
            ..ResourceFilter::default()
        };
        assert_eq!(filter_resources(&resources, &by_tag).len(), 2);

        let all = filter_resources(&resources, &ResourceFilter::default());
        assert_eq!(all[0].title, "Crash course");

        let favorites = ResourceFilter {
            favorites_only: true,
            ..ResourceFilter::default()
        };
        assert_eq!(filter_resources(&resources, &favorites).len(), 1);

        let kind = ResourceFilter {
            kind: Some(ResourceKind::Flashcards),
            ..ResourceFilter::default()
        };
        assert_eq!(filter_resources(&resources, &kind)[0].title, "Deck");
    }

    #[test]
    fn link_like_resources_need_a_url() {
        let mut textbook = resource("Campbell", ResourceKind::Textbook, false, &[]);
        assert!(validate_resource(&textbook).is_err());
        textbook.url = Some("https://example.org/book".to_string());
        assert!(validate_resource(&textbook).is_ok());
        assert!(validate_resource(&resource("Deck", ResourceKind::Flashcards, false, &[])).is_ok());
    }
}
