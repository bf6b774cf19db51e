//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
/// 定义索引值 0 = Dark, 1 = Light
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题索引（用于写回配置）
pub fn current_theme_index() -> u8 {
    CURRENT_THEME.load(Ordering::SeqCst)
}

/// 在 Dark / Light 之间切换
pub fn toggle_theme() {
    let next = u8::from(current_theme_index() == 0);
    set_theme_index(next);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题（Docker 蓝高亮）
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(29, 99, 237),
            highlight: Color::Rgb(29, 99, 237),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default()
            .bg(colors().highlight)
            .fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}
