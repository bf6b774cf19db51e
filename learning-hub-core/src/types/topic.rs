//! Topics and resolved lesson content

use super::Section;

/// A lesson topic within a section
///
/// `slug` names the backing file (`content/{section}/{slug}.md`); `title`
/// is what the topic row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub slug: &'static str,
    pub title: &'static str,
}

/// Where a resolved lesson body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Loaded from a Markdown file via the `TopicSource`
    File,
    /// Built-in placeholder (file missing or unreadable)
    Placeholder,
}

/// A fully resolved lesson, ready for rendering
///
/// Produced by `ContentService::load`; the body is always non-empty
/// Markdown, whatever happened on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicContent {
    pub section: Section,
    pub slug: String,
    pub origin: ContentOrigin,
    pub markdown: String,
}

impl TopicContent {
    /// Whether the body is a built-in fallback rather than a real lesson
    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, ContentOrigin::Placeholder)
    }
}
