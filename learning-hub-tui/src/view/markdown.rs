//! Markdown → 终端富文本
//!
//! 把 CommonMark 源文本渲染成带样式的 ratatui `Line` 列表，
//! 供课程页正文显示。对任意输入都能渲染出内容，绝不 panic。
//!
//! 支持：标题、段落、强调/加粗/删除线、行内代码、围栏代码块、
//! 有序/无序列表（可嵌套）、引用块、分隔线、链接（下划线显示）。
//! 表格与内嵌 HTML 原样降级为普通文本。

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// 渲染 Markdown 源文本
pub fn render(source: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = TextRenderer::new();
    for event in Parser::new_ext(source, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// 行内样式状态（嵌套计数，支持 **a _b_ c** 这类组合）
#[derive(Default)]
struct InlineState {
    emphasis: usize,
    strong: usize,
    strikethrough: usize,
    link: usize,
}

impl InlineState {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if self.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strong > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.strikethrough > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link > 0 {
            style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

/// 列表状态（每层嵌套一项）
struct ListLevel {
    ordered: bool,
    next_index: u64,
}

struct TextRenderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,

    inline: InlineState,
    heading: Option<HeadingLevel>,
    blockquote_depth: usize,
    list_stack: Vec<ListLevel>,

    code_lang: Option<String>,
    code_buf: String,
}

impl TextRenderer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            inline: InlineState::default(),
            heading: None,
            blockquote_depth: 0,
            list_stack: Vec::new(),
            code_lang: None,
            code_buf: String::new(),
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        // 去掉末尾多余的空行
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => self.rule(),
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.push(marker, Style::default().fg(Color::DarkGray));
            }
            // 表格和内嵌 HTML 不支持，按普通文本降级
            Event::Html(text) | Event::InlineHtml(text) => self.text(&text),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.blank_line();
                self.heading = Some(level);
            }
            Tag::BlockQuote(_) => {
                self.flush_line();
                self.blockquote_depth += 1;
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                let lang = match kind {
                    CodeBlockKind::Fenced(name) => name.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_lang = Some(lang);
                self.code_buf.clear();
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(ListLevel {
                    ordered: start.is_some(),
                    next_index: start.unwrap_or(1),
                });
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let bullet = match self.list_stack.last_mut() {
                    Some(level) if level.ordered => {
                        let bullet = format!("{}. ", level.next_index);
                        level.next_index += 1;
                        bullet
                    }
                    _ => "• ".to_string(),
                };
                self.push(&format!("{indent}{bullet}"), Style::default().fg(Color::DarkGray));
            }
            Tag::Emphasis => self.inline.emphasis += 1,
            Tag::Strong => self.inline.strong += 1,
            Tag::Strikethrough => self.inline.strikethrough += 1,
            Tag::Link { .. } => self.inline.link += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.blank_line();
            }
            TagEnd::Heading(_) => {
                self.flush_line();
                self.heading = None;
                self.blank_line();
            }
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.blockquote_depth = self.blockquote_depth.saturating_sub(1);
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                self.code_lang = None;
                let code = std::mem::take(&mut self.code_buf);
                let style = Style::default().fg(Color::Rgb(152, 195, 121));
                for line in code.lines() {
                    self.lines
                        .push(Line::from(Span::styled(format!("  {line}"), style)));
                }
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis => self.inline.emphasis = self.inline.emphasis.saturating_sub(1),
            TagEnd::Strong => self.inline.strong = self.inline.strong.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.inline.strikethrough = self.inline.strikethrough.saturating_sub(1);
            }
            TagEnd::Link => self.inline.link = self.inline.link.saturating_sub(1),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.code_lang.is_some() {
            self.code_buf.push_str(text);
            return;
        }
        self.quote_prefix_if_needed();
        let style = self.heading.map_or_else(|| self.inline.style(), heading_style);
        self.push(text, style);
    }

    fn inline_code(&mut self, code: &str) {
        self.quote_prefix_if_needed();
        let style = Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD);
        self.push(code, style);
    }

    fn rule(&mut self) {
        self.flush_line();
        self.lines.push(Line::from(Span::styled(
            "─".repeat(60),
            Style::default().fg(Color::DarkGray),
        )));
        self.blank_line();
    }

    /// 引用块行首加 "> " 前缀
    fn quote_prefix_if_needed(&mut self) {
        if self.current.is_empty() && self.blockquote_depth > 0 {
            let prefix = "> ".repeat(self.blockquote_depth);
            self.push(&prefix, Style::default().fg(Color::DarkGray));
        }
    }

    fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    /// 块之间留一个空行（连续空行合并）
    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|l| l.width() == 0) {
            return;
        }
        if self.lines.is_empty() {
            return;
        }
        self.lines.push(Line::from(""));
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        HeadingLevel::H2 => Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn renders_heading_with_style() {
        let lines = render("# 📋 Compliance & Governance\n\nbody\n");
        let text = plain(&lines);

        assert_eq!(text[0], "📋 Compliance & Governance");
        assert_eq!(
            lines[0].spans[0].style.fg,
            Some(Color::Yellow),
            "h1 must be highlighted"
        );
        assert!(text.contains(&"body".to_string()));
    }

    #[test]
    fn renders_lists_with_bullets() {
        let lines = render("- one\n- two\n  1. nested\n");
        let text = plain(&lines);

        assert_eq!(text[0], "• one");
        assert_eq!(text[1], "• two");
        assert!(text.iter().any(|l| l.contains("1. nested")));
    }

    #[test]
    fn renders_fenced_code_blocks() {
        let lines = render("```sh\ndocker run hello-world\n```\n");
        let text = plain(&lines);
        assert!(text.iter().any(|l| l.contains("docker run hello-world")));
    }

    #[test]
    fn renders_blockquote_prefix() {
        let lines = render("> quoted wisdom\n");
        let text = plain(&lines);
        assert_eq!(text[0], "> quoted wisdom");
    }

    #[test]
    fn merges_soft_breaks_into_one_line() {
        let lines = render("first\nsecond\n");
        let text = plain(&lines);
        assert_eq!(text[0], "first second");
    }

    #[test]
    fn arbitrary_input_never_panics() {
        for source in ["", "````", "*`[", "|a|b|\n|-|-|\n|1|2|", "<div>x</div>"] {
            let _ = render(source);
        }
    }

    #[test]
    fn emphasis_styles_apply() {
        let lines = render("**bold** and *italic*\n");
        let spans = &lines[0].spans;
        assert!(spans
            .iter()
            .any(|s| s.content.as_ref() == "bold"
                && s.style.add_modifier.contains(Modifier::BOLD)));
        assert!(spans
            .iter()
            .any(|s| s.content.as_ref() == "italic"
                && s.style.add_modifier.contains(Modifier::ITALIC)));
    }
}
