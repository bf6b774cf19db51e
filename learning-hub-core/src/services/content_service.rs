//! Lesson resolution service
//!
//! Resolves a (section, slug) pair to displayable Markdown: first the
//! configured `TopicSource`, then the built-in placeholder table, then a
//! synthesized stub. Resolution is total; callers never see an error.

use std::sync::Arc;

use crate::catalog;
use crate::placeholder;
use crate::traits::TopicSource;
use crate::types::{ContentOrigin, Section, TopicContent};

/// Lesson resolution service
pub struct ContentService {
    source: Arc<dyn TopicSource>,
}

impl ContentService {
    /// Create a content service over a lesson source
    #[must_use]
    pub fn new(source: Arc<dyn TopicSource>) -> Self {
        Self { source }
    }

    /// Resolve the lesson for a (section, slug) pair
    ///
    /// Any fetch failure falls back to the placeholder table; the failure
    /// itself only goes to the developer log channel. Retries happen only
    /// when the caller re-requests the same pair.
    pub async fn load(&self, section: Section, slug: &str) -> TopicContent {
        match self.source.fetch(section, slug).await {
            Ok(markdown) => TopicContent {
                section,
                slug: slug.to_string(),
                origin: ContentOrigin::File,
                markdown,
            },
            Err(err) => {
                log::debug!(
                    "falling back to placeholder for {}: {err}",
                    catalog::content_path(section, slug)
                );
                TopicContent {
                    section,
                    slug: slug.to_string(),
                    origin: ContentOrigin::Placeholder,
                    markdown: placeholder::resolve(section, slug),
                }
            }
        }
    }

    /// Resolve the lesson a section opens with
    ///
    /// Returns `None` only for `Home`, which has no default mapping.
    pub async fn load_default(&self, section: Section) -> Option<TopicContent> {
        let slug = catalog::default_topic(section)?;
        Some(self.load(section, slug).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTopicSource;

    fn service(source: MockTopicSource) -> ContentService {
        ContentService::new(Arc::new(source))
    }

    #[tokio::test]
    async fn load_prefers_the_source() {
        let source = MockTopicSource::new();
        source
            .insert(Section::Basics, "what-is-docker", "# Real lesson\n")
            .await;

        let content = service(source).load(Section::Basics, "what-is-docker").await;

        assert_eq!(content.origin, ContentOrigin::File);
        assert_eq!(content.markdown, "# Real lesson\n");
        assert_eq!(content.section, Section::Basics);
        assert_eq!(content.slug, "what-is-docker");
    }

    #[tokio::test]
    async fn missing_lesson_falls_back_to_placeholder() {
        // End-to-end: security/compliance with no reachable file shows the
        // pre-authored compliance fragment.
        let content = service(MockTopicSource::new())
            .load(Section::Security, "compliance")
            .await;

        assert_eq!(content.origin, ContentOrigin::Placeholder);
        assert!(content.markdown.starts_with("# 📋 Compliance & Governance"));
    }

    #[tokio::test]
    async fn unknown_slug_synthesizes_stub() {
        let content = service(MockTopicSource::new())
            .load(Section::Practical, "unknown-slug")
            .await;

        assert_eq!(content.origin, ContentOrigin::Placeholder);
        assert!(content.markdown.contains("# unknown-slug"));
        assert!(content.markdown.contains("content/practical/unknown-slug.md"));
    }

    #[tokio::test]
    async fn source_failure_is_absorbed() {
        let source = MockTopicSource::new();
        source
            .insert(Section::History, "evolution", "# unreachable\n")
            .await;
        source.set_fail(true).await;

        let content = service(source).load(Section::History, "evolution").await;

        assert_eq!(content.origin, ContentOrigin::Placeholder);
        assert!(content.markdown.contains("Evolution of Containerization"));
    }

    #[tokio::test]
    async fn load_never_returns_empty_markdown() {
        let svc = service(MockTopicSource::new());
        for section in Section::all() {
            let content = svc.load(*section, "nope").await;
            assert!(!content.markdown.is_empty());
        }
    }

    #[tokio::test]
    async fn load_default_uses_the_mapping() {
        let content = service(MockTopicSource::new())
            .load_default(Section::Basics)
            .await
            .unwrap();
        assert_eq!(content.slug, "what-is-docker");

        assert!(service(MockTopicSource::new())
            .load_default(Section::Home)
            .await
            .is_none());
    }
}
