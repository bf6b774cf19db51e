//! 单个内容面板的正文状态

use learning_hub_core::{ContentOrigin, TopicContent};

/// 正文加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// 尚未请求过任何内容
    #[default]
    Idle,
    /// 有请求在途
    Loading,
    /// 已有可显示的正文
    Ready,
}

/// 内容面板正文状态
#[derive(Debug, Default)]
pub struct ContentState {
    /// 加载状态
    pub status: LoadStatus,
    /// 当前正文对应的主题 slug
    pub slug: Option<String>,
    /// 正文来源（文件 / 占位内容）
    pub origin: Option<ContentOrigin>,
    /// Markdown 正文
    pub markdown: String,
    /// 垂直滚动偏移（行）
    pub scroll: u16,
}

impl ContentState {
    /// 标记一次新的加载开始
    ///
    /// 旧正文保留显示，直到结果到达 —— 与原始行为一致。
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// 应用一个加载结果
    ///
    /// 不校验结果是否对应最近一次请求：后完成者覆盖先完成者。
    pub fn apply(&mut self, content: TopicContent) {
        self.status = LoadStatus::Ready;
        self.slug = Some(content.slug);
        self.origin = Some(content.origin);
        self.markdown = content.markdown;
        self.scroll = 0;
    }

    /// 是否有请求在途
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// 向上滚动
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// 向下滚动
    ///
    /// 以源文本行数为粗略上限；精确的可视区域夹紧在 View 层渲染时发生。
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// 跳到开头
    pub fn scroll_top(&mut self) {
        self.scroll = 0;
    }

    /// 跳到末尾附近
    pub fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.markdown.lines().count()).unwrap_or(u16::MAX)
    }
}
