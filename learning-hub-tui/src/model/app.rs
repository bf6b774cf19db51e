//! 应用主状态结构

use learning_hub_core::Section;

use super::state::{HomeState, ModalState, Panes};
use super::NavigationState;

/// 焦点面板枚举
///
/// `Content` 焦点下按键作用于当前 Section 的面板：
/// Home 时是学习路径列表，课程 Section 时是主题行和正文滚动。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    /// 是否是导航面板
    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// 是否是内容面板
    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}

/// 一次排队的内容加载请求
///
/// Update 层只把请求压进 `App::pending_loads`，
/// 由主循环派发到 Backend 层执行（保持 Update 层纯同步、可测试）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub section: Section,
    pub slug: String,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前可见的 Section（同一时刻有且只有一个）
    pub current_section: Section,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各面板状态 ===
    /// 首页（学习路径）状态
    pub home: HomeState,
    /// 各课程 Section 的面板状态
    pub panes: Panes,

    /// 弹窗状态
    pub modal: ModalState,

    /// 排队待派发的内容加载请求
    pending_loads: Vec<LoadRequest>,
}

impl App {
    /// 创建新的应用实例（首页可见，无任何加载在途）
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_section: Section::Home,
            status_message: None,
            home: HomeState::new(),
            panes: Panes::new(),
            modal: ModalState::new(),
            pending_loads: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 排队一个 (section, slug) 的内容加载
    ///
    /// Home 没有内容面板，指向它的请求被静默丢弃。
    pub fn queue_load(&mut self, section: Section, slug: &str) {
        if self.panes.pane_mut(section).is_none() {
            return;
        }
        self.pending_loads.push(LoadRequest {
            section,
            slug: slug.to_string(),
        });
    }

    /// 取走所有排队的加载请求（主循环每轮调用）
    pub fn take_pending_loads(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.pending_loads)
    }

    /// 当前是否有排队的请求（测试用）
    #[cfg(test)]
    pub fn pending_loads(&self) -> &[LoadRequest] {
        &self.pending_loads
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
