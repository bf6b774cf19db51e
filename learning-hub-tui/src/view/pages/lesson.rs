//! 课程页视图
//!
//! 上方是主题行（原页面的 content-btn 组），下方是渲染后的正文。
//! 正文超出可视区域时按 `ContentState::scroll` 偏移显示。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use learning_hub_core::ContentOrigin;

use crate::model::{App, LoadStatus, PaneState};
use crate::view::markdown;
use crate::view::theme::colors;

/// 渲染课程页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(pane) = app.panes.pane(app.current_section) else {
        // 没有面板的 Section 不渲染（防御性保护，正常流程到不了这里）
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 主题行
            Constraint::Min(1),    // 正文
            Constraint::Length(1), // 来源提示
        ])
        .split(area);

    render_topic_row(pane, frame, layout[0]);
    render_body(pane, frame, layout[1]);
    render_origin_line(pane, frame, layout[2]);
}

/// 渲染主题行（水平标签，激活项高亮）
fn render_topic_row(pane: &PaneState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::raw("  ")];

    for (i, topic) in pane.topics.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let is_active = i == pane.active_topic;
        let style = if is_active {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(topic.title, style));
    }

    let row_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let mut lines = vec![Line::from(spans)];
    lines.push(Line::from(Span::styled(
        "  ".to_string() + &"─".repeat(row_width.saturating_sub(2).min(area.width as usize)),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染正文
fn render_body(pane: &PaneState, frame: &mut Frame, area: Rect) {
    let c = colors();

    if pane.content.markdown.is_empty() {
        // 首次加载尚未完成
        let hint = if pane.content.is_loading() {
            "  Loading lesson..."
        } else {
            "  Select a topic to start reading"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(c.muted),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = markdown::render(&pane.content.markdown);
    let total = lines.len() as u16;
    // 渲染期夹紧，保证最后一屏始终可见
    let max_scroll = total.saturating_sub(area.height);
    let scroll = pane.content.scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// 渲染来源提示行
fn render_origin_line(pane: &PaneState, frame: &mut Frame, area: Rect) {
    let c = colors();

    let (text, style) = match (pane.content.status, pane.content.origin) {
        (LoadStatus::Loading, _) => (
            "  ⟳ loading...".to_string(),
            Style::default().fg(c.muted),
        ),
        (_, Some(ContentOrigin::File)) => {
            let slug = pane.content.slug.as_deref().unwrap_or_default();
            (
                format!("  ✓ loaded from content file ({slug}.md)"),
                Style::default().fg(c.success),
            )
        }
        (_, Some(ContentOrigin::Placeholder)) => (
            "  ◌ built-in preview — add the Markdown file to replace it".to_string(),
            Style::default().fg(c.warning),
        ),
        _ => (String::new(), Style::default()),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))),
        area,
    );
}
