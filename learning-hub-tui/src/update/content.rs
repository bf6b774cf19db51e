//! 内容面板更新逻辑
//!
//! 首页列表选择、主题切换、正文滚动，以及加载结果的应用。

use learning_hub_core::TopicContent;

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航（首页） ==========
        ContentMessage::SelectPrevious => {
            if app.current_section.is_home() {
                app.home.select_previous();
            }
        }
        ContentMessage::SelectNext => {
            if app.current_section.is_home() {
                app.home.select_next();
            }
        }
        ContentMessage::Confirm => {
            if app.current_section.is_home() {
                if let Some(section) = app.home.selected_section() {
                    super::enter_section(app, section);
                }
            }
        }

        // ========== 主题切换（课程页） ==========
        ContentMessage::PrevTopic => {
            switch_topic(app, |pane| pane.prev_topic());
        }
        ContentMessage::NextTopic => {
            switch_topic(app, |pane| pane.next_topic());
        }

        // ========== 正文滚动 ==========
        ContentMessage::ScrollUp => {
            with_content(app, |content| content.scroll_up(1));
        }
        ContentMessage::ScrollDown => {
            with_content(app, |content| content.scroll_down(1));
        }
        ContentMessage::ScrollTop => {
            with_content(app, |content| content.scroll_top());
        }
        ContentMessage::ScrollBottom => {
            with_content(app, |content| content.scroll_bottom());
        }

        // ========== 加载结果 ==========
        ContentMessage::Loaded(content) => {
            apply_loaded(app, content);
        }
    }
}

/// 在当前 Section 的面板上执行主题切换，并排队新主题的加载
fn switch_topic(app: &mut App, go: impl FnOnce(&mut crate::model::PaneState) -> bool) {
    let section = app.current_section;
    let Some(pane) = app.panes.pane_mut(section) else {
        return;
    };
    if !go(pane) {
        return;
    }
    let Some(slug) = pane.active_slug() else {
        return;
    };
    pane.content.begin_loading();
    app.queue_load(section, slug);
}

/// 对当前 Section 的正文状态执行一个操作
fn with_content(app: &mut App, op: impl FnOnce(&mut crate::model::ContentState)) {
    if let Some(pane) = app.panes.pane_mut(app.current_section) {
        op(&mut pane.content);
    }
}

/// 应用一个加载结果
///
/// 按到达顺序覆盖；没有面板的 Section（Home）静默丢弃。
fn apply_loaded(app: &mut App, content: TopicContent) {
    let Some(pane) = app.panes.pane_mut(content.section) else {
        return;
    };
    pane.content.apply(content);
    // 结果已落地，"Reloading..." 之类的过程消息不再需要
    app.clear_status();
}
