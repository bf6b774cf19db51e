//! 内容面板消息
//!
//! 处理内容面板中的操作：首页列表选择、主题切换、正文滚动，
//! 以及 Backend 层送回的加载结果。

use learning_hub_core::TopicContent;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航（首页） ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 确认选择（进入选中的 Section）
    Confirm,

    // ========== 主题切换（课程页） ==========
    /// 激活上一个主题
    PrevTopic,
    /// 激活下一个主题
    NextTopic,

    // ========== 正文滚动 ==========
    /// 向上滚动一行
    ScrollUp,
    /// 向下滚动一行
    ScrollDown,
    /// 跳到开头
    ScrollTop,
    /// 跳到末尾
    ScrollBottom,

    // ========== 加载结果 ==========
    /// 一次内容加载完成（来自 Backend 层）
    Loaded(TopicContent),
}
