//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, Modal};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn hint(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let area = centered_rect(52, 19, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let lines = vec![
        Line::styled(
            "Global shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        hint("Tab", "Switch panel"),
        hint("↑↓/jk", "Navigate / Scroll"),
        hint("Enter", "Open section"),
        hint("Esc", "Back to Home"),
        hint("Alt+q", "Quit"),
        Line::from(""),
        Line::styled(
            "Lesson shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        hint("←→/[]", "Previous / Next topic"),
        hint("Alt+r", "Reload lesson file"),
        hint("Alt+t", "Toggle dark/light theme"),
        Line::from(""),
        Line::styled(
            "Press Esc to close the help",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
