use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Section;

/// Lesson retrieval abstraction
///
/// Implementations fetch the raw Markdown for a (section, slug) pair from
/// wherever lessons live: a content directory on disk in the TUI, an
/// in-memory map in tests. Absence of a lesson is an expected condition and
/// must come back as an error value, never a panic.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Fetch the Markdown body for `content/{section}/{slug}.md`
    async fn fetch(&self, section: Section, slug: &str) -> CoreResult<String>;
}
