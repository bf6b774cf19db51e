//! Test helpers
//!
//! Provides an in-memory `TopicSource` with failure injection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::TopicSource;
use crate::types::Section;

// ===== MockTopicSource =====

pub struct MockTopicSource {
    lessons: RwLock<HashMap<(Section, String), String>>,
    /// When true, every fetch fails (exercises the fallback path)
    fail: RwLock<bool>,
}

impl MockTopicSource {
    pub fn new() -> Self {
        Self {
            lessons: RwLock::new(HashMap::new()),
            fail: RwLock::new(false),
        }
    }

    pub async fn insert(&self, section: Section, slug: &str, markdown: &str) {
        self.lessons
            .write()
            .await
            .insert((section, slug.to_string()), markdown.to_string());
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }
}

#[async_trait]
impl TopicSource for MockTopicSource {
    async fn fetch(&self, section: Section, slug: &str) -> CoreResult<String> {
        if *self.fail.read().await {
            return Err(CoreError::SourceError("injected failure".to_string()));
        }
        self.lessons
            .read()
            .await
            .get(&(section, slug.to_string()))
            .cloned()
            .ok_or_else(|| {
                CoreError::LessonNotFound(crate::catalog::content_path(section, slug))
            })
    }
}
