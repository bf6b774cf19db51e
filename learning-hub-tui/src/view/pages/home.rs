//! 首页视图
//!
//! 欢迎信息 + 学习路径。路径项按推荐顺序列出全部课程 Section，
//! Enter 直接进入对应 Section 并加载其默认主题。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use learning_hub_core::{catalog, Section};

use crate::model::{App, HomeState};
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 首页布局：欢迎信息 + 学习路径
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 学习路径
        ])
        .split(area);

    render_welcome(frame, layout[0]);
    render_learning_path(app, frame, layout[1]);
}

/// 欢迎信息
fn render_welcome(frame: &mut Frame, area: Rect) {
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the Docker Learning Hub",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  From mainframes to cloud-native: learn containers step by step",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    frame.render_widget(Paragraph::new(welcome), area);
}

/// 学习路径列表
fn render_learning_path(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" Learning Path ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = HomeState::path()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_selected = i == app.home.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let topic_count = catalog::topics(*section).len();

            let style = if is_selected {
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let line = Line::from(vec![
                Span::styled(format!("{}{}. ", prefix, i + 1), style),
                Span::styled(section.title().to_string(), style),
                Span::styled(
                    format!("  — {} {}", topic_count, subtitle(*section)),
                    Style::default().fg(c.muted),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.home.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn subtitle(section: Section) -> &'static str {
    match section {
        Section::History => "lessons on how containers came to be",
        Section::Basics => "lessons on Docker fundamentals",
        Section::Advanced => "lessons on builds, compose and networking",
        Section::Security => "lessons on hardening containers",
        Section::Practical => "hands-on projects",
        Section::Home => "",
    }
}
