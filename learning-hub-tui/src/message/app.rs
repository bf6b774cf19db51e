//! 应用主消息枚举

use super::{ContentMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 返回首页
    GoBack,

    /// 重新加载当前主题
    Reload,

    /// 切换主题配色
    ToggleTheme,

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
