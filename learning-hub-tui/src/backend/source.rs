//! 课程文件源
//!
//! 实现 learning-hub-core 的 `TopicSource` trait，
//! 从内容根目录下的 `content/{section}/{file}.md` 读取课程。
//! 文件缺失是预期情况，交由上层回退到占位内容。

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use learning_hub_core::{catalog, CoreError, CoreResult, Section, TopicSource};

/// 基于文件系统的课程源
pub struct FsTopicSource {
    /// 内容根目录（`content/` 相对于它解析）
    root: PathBuf,
}

impl FsTopicSource {
    /// 创建课程文件源
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// 某主题的磁盘路径
    fn path_for(&self, section: Section, slug: &str) -> PathBuf {
        self.root.join(catalog::content_path(section, slug))
    }
}

#[async_trait]
impl TopicSource for FsTopicSource {
    async fn fetch(&self, section: Section, slug: &str) -> CoreResult<String> {
        let path = self.path_for(section, slug);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(CoreError::LessonNotFound(path.display().to_string()))
            }
            Err(err) => Err(CoreError::LessonUnreadable {
                path: path.display().to_string(),
                reason: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// 在临时目录里铺一个最小的 content/ 树
    fn content_root(markdown: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "learning-hub-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let dir = root.join("content/basics");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("what-is-docker.md"), markdown).unwrap();
        root
    }

    #[tokio::test]
    async fn reads_an_existing_lesson() {
        let root = content_root("# Docker\n\nreal lesson body\n");
        let source = FsTopicSource::new(root.clone());

        let body = source.fetch(Section::Basics, "what-is-docker").await.unwrap();
        assert!(body.contains("real lesson body"));

        fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn missing_lesson_is_not_found() {
        let root = content_root("# Docker\n");
        let source = FsTopicSource::new(root.clone());

        let err = source.fetch(Section::Basics, "containers-vs-vms").await;
        assert!(matches!(err, Err(CoreError::LessonNotFound(_))));

        fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn missing_root_is_not_found() {
        let source = FsTopicSource::new(PathBuf::from("/nonexistent/learning-hub"));
        let err = source.fetch(Section::History, "evolution").await;
        assert!(matches!(err, Err(CoreError::LessonNotFound(_))));
    }
}
