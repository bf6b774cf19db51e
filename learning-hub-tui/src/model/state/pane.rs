//! 课程 Section 的面板状态

use learning_hub_core::{catalog, Section, Topic};

use super::ContentState;

/// 单个课程 Section 的面板状态：主题行 + 正文
#[derive(Debug)]
pub struct PaneState {
    /// 所属 Section
    pub section: Section,
    /// 本 Section 的主题列表（静态目录）
    pub topics: &'static [Topic],
    /// 当前激活的主题索引（同一时刻只有一个）
    pub active_topic: usize,
    /// 正文状态
    pub content: ContentState,
}

impl PaneState {
    /// 创建面板状态，激活默认主题
    pub fn new(section: Section) -> Self {
        let mut pane = Self {
            section,
            topics: catalog::topics(section),
            active_topic: 0,
            content: ContentState::default(),
        };
        pane.activate_default();
        pane
    }

    /// 把激活主题重置为默认主题
    ///
    /// 进入 Section 总是从默认主题开始（与原始导航行为一致）。
    pub fn activate_default(&mut self) {
        self.active_topic = catalog::default_topic(self.section)
            .and_then(|slug| self.topics.iter().position(|t| t.slug == slug))
            .unwrap_or(0);
    }

    /// 当前激活主题的 slug
    pub fn active_slug(&self) -> Option<&'static str> {
        self.topics.get(self.active_topic).map(|t| t.slug)
    }

    /// 激活上一个主题，返回是否发生了切换
    pub fn prev_topic(&mut self) -> bool {
        if self.active_topic > 0 {
            self.active_topic -= 1;
            true
        } else {
            false
        }
    }

    /// 激活下一个主题，返回是否发生了切换
    pub fn next_topic(&mut self) -> bool {
        if self.active_topic + 1 < self.topics.len() {
            self.active_topic += 1;
            true
        } else {
            false
        }
    }
}

/// 所有课程 Section 的面板集合
///
/// Home 没有面板；`pane(_mut)` 对它返回 None，调用方静默跳过。
#[derive(Debug)]
pub struct Panes {
    history: PaneState,
    basics: PaneState,
    advanced: PaneState,
    security: PaneState,
    practical: PaneState,
}

impl Panes {
    /// 创建所有面板
    pub fn new() -> Self {
        Self {
            history: PaneState::new(Section::History),
            basics: PaneState::new(Section::Basics),
            advanced: PaneState::new(Section::Advanced),
            security: PaneState::new(Section::Security),
            practical: PaneState::new(Section::Practical),
        }
    }

    /// 指定 Section 的面板
    pub fn pane(&self, section: Section) -> Option<&PaneState> {
        match section {
            Section::Home => None,
            Section::History => Some(&self.history),
            Section::Basics => Some(&self.basics),
            Section::Advanced => Some(&self.advanced),
            Section::Security => Some(&self.security),
            Section::Practical => Some(&self.practical),
        }
    }

    /// 指定 Section 的可变面板
    pub fn pane_mut(&mut self, section: Section) -> Option<&mut PaneState> {
        match section {
            Section::Home => None,
            Section::History => Some(&mut self.history),
            Section::Basics => Some(&mut self.basics),
            Section::Advanced => Some(&mut self.advanced),
            Section::Security => Some(&mut self.security),
            Section::Practical => Some(&mut self.practical),
        }
    }
}

impl Default for Panes {
    fn default() -> Self {
        Self::new()
    }
}
