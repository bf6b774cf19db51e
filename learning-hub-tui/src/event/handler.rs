//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Reload;
    }

    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 进入选中的 Section
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.current_section.is_home() {
        handle_home_keys(key)
    } else {
        handle_lesson_keys(key)
    }
}

/// 处理首页（学习路径列表）的按键
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 进入选中的 Section
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理课程页面的按键
fn handle_lesson_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ← 或 h 或 [: 上一个主题
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => {
            AppMessage::Content(ContentMessage::PrevTopic)
        }
        // → 或 l 或 ]: 下一个主题
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => {
            AppMessage::Content(ContentMessage::NextTopic)
        }
        // ↑ 或 k: 向上滚动
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::ScrollUp),
        // ↓ 或 j: 向下滚动
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::ScrollDown),
        // Home: 跳到正文开头
        KeyCode::Home => AppMessage::Content(ContentMessage::ScrollTop),
        // End: 跳到正文末尾
        KeyCode::End => AppMessage::Content(ContentMessage::ScrollBottom),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键（帮助弹窗只响应关闭）
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => AppMessage::CloseModal,
        KeyCode::Char('c') if key.modifiers == crossterm::event::KeyModifiers::CONTROL => {
            AppMessage::CloseModal
        }
        _ => AppMessage::Noop,
    }
}
