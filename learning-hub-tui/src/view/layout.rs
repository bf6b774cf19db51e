//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(content_area);

    let nav_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧导航
    components::navigation::render(app, frame, nav_area);

    // 渲染右侧内容
    render_section_pane(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" 🐳 Docker Learning Hub v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染当前 Section 的内容面板
fn render_section_pane(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 内容区域的边框
    let is_focused = app.focus.is_content();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_section.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 同一时刻只有 current_section 的面板可见
    if app.current_section.is_home() {
        pages::home::render(app, frame, inner_area);
    } else {
        pages::lesson::render(app, frame, inner_area);
    }
}
