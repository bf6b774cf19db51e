//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!
//! 这一层保持纯同步：需要异步加载时只把 `LoadRequest` 压进队列，
//! 由主循环派发给 Backend 层，结果再以 `ContentMessage::Loaded`
//! 的形式回到这里 —— 于是所有导航/回退语义都可以脱离终端和
//! 运行时做单元测试。

mod content;
mod navigation;

use learning_hub_core::Section;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if !app.current_section.is_home() {
                // 否则返回首页
                enter_section(app, Section::Home);
            }
        }

        AppMessage::Reload => {
            reload_active_topic(app);
        }

        AppMessage::ToggleTheme => {
            crate::view::theme::toggle_theme();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::Noop => {}
    }
}

/// 进入指定 Section
///
/// 单一赋值保证同一时刻只有一个 Section 可见；重复进入当前
/// Section 只会重新排队同一次加载，不产生错误。
/// 非 Home Section 总是从默认主题开始，并排队它的加载。
pub fn enter_section(app: &mut App, section: Section) {
    app.current_section = section;
    app.navigation.sync_to(section);
    app.clear_status();

    if !section.is_home() {
        if let Some(pane) = app.panes.pane_mut(section) {
            pane.activate_default();
        }
        request_active_topic(app, section);
    }
}

/// 排队加载某 Section 当前激活主题
fn request_active_topic(app: &mut App, section: Section) {
    let Some(pane) = app.panes.pane_mut(section) else {
        // Home 或未知 Section：没有内容面板，静默跳过
        return;
    };
    let Some(slug) = pane.active_slug() else {
        return;
    };
    pane.content.begin_loading();
    app.queue_load(section, slug);
}

/// 重新加载当前 Section 的激活主题（用户手动触发的重试）
fn reload_active_topic(app: &mut App) {
    let section = app.current_section;
    if section.is_home() {
        return;
    }
    app.set_status("Reloading...");
    request_active_topic(app, section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, NavigationMessage};
    use crate::model::LoadRequest;
    use learning_hub_core::{ContentOrigin, TopicContent};

    fn loaded(section: Section, slug: &str, markdown: &str) -> AppMessage {
        AppMessage::Content(ContentMessage::Loaded(TopicContent {
            section,
            slug: slug.to_string(),
            origin: ContentOrigin::File,
            markdown: markdown.to_string(),
        }))
    }

    #[test]
    fn entering_a_section_activates_it_and_queues_its_default() {
        let mut app = App::new();

        enter_section(&mut app, Section::Basics);

        assert_eq!(app.current_section, Section::Basics);
        assert_eq!(
            app.navigation.current_section(),
            Some(Section::Basics),
            "nav highlight must follow the visible section"
        );
        assert_eq!(
            app.pending_loads(),
            &[LoadRequest {
                section: Section::Basics,
                slug: "what-is-docker".to_string(),
            }]
        );
        assert!(app.panes.pane(Section::Basics).unwrap().content.is_loading());
    }

    #[test]
    fn entering_home_queues_nothing() {
        let mut app = App::new();
        enter_section(&mut app, Section::Home);

        assert_eq!(app.current_section, Section::Home);
        assert!(app.pending_loads().is_empty());
    }

    #[test]
    fn entering_a_section_twice_is_idempotent() {
        let mut app = App::new();

        enter_section(&mut app, Section::Security);
        let first_pending = app.take_pending_loads();

        enter_section(&mut app, Section::Security);
        let second_pending = app.take_pending_loads();

        // 状态与单次进入相同，重复进入只是重新排队同一次加载
        assert_eq!(app.current_section, Section::Security);
        assert_eq!(app.navigation.current_section(), Some(Section::Security));
        assert_eq!(first_pending, second_pending);
    }

    #[test]
    fn nav_confirm_enters_the_highlighted_section() {
        let mut app = App::new();

        // Home 之后的第一项是 History
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));

        assert_eq!(app.current_section, Section::History);
        assert_eq!(
            app.take_pending_loads(),
            vec![LoadRequest {
                section: Section::History,
                slug: "evolution".to_string(),
            }]
        );
    }

    #[test]
    fn topic_switch_queues_that_topic() {
        let mut app = App::new();
        enter_section(&mut app, Section::Security);
        app.take_pending_loads();

        update(&mut app, AppMessage::Content(ContentMessage::NextTopic));

        let pane = app.panes.pane(Section::Security).unwrap();
        assert_eq!(pane.active_slug(), Some("vulnerability-scanning"));
        assert_eq!(
            app.take_pending_loads(),
            vec![LoadRequest {
                section: Section::Security,
                slug: "vulnerability-scanning".to_string(),
            }]
        );
    }

    #[test]
    fn re_entering_a_section_starts_from_its_default_topic() {
        let mut app = App::new();
        enter_section(&mut app, Section::Security);
        app.take_pending_loads();

        // 切到别的主题，离开，再回来
        update(&mut app, AppMessage::Content(ContentMessage::NextTopic));
        enter_section(&mut app, Section::Home);
        app.take_pending_loads();

        enter_section(&mut app, Section::Security);
        let pane = app.panes.pane(Section::Security).unwrap();
        assert_eq!(pane.active_slug(), Some("security-fundamentals"));
        assert_eq!(
            app.take_pending_loads(),
            vec![LoadRequest {
                section: Section::Security,
                slug: "security-fundamentals".to_string(),
            }]
        );
    }

    #[test]
    fn topic_switch_at_the_edge_queues_nothing() {
        let mut app = App::new();
        enter_section(&mut app, Section::History);
        app.take_pending_loads();

        // 默认主题已是第一项
        update(&mut app, AppMessage::Content(ContentMessage::PrevTopic));
        assert!(app.pending_loads().is_empty());
    }

    #[test]
    fn loaded_results_apply_in_arrival_order() {
        let mut app = App::new();
        enter_section(&mut app, Section::Basics);

        update(&mut app, loaded(Section::Basics, "what-is-docker", "# first\n"));
        update(&mut app, loaded(Section::Basics, "basic-commands", "# second\n"));

        // 后完成者覆盖先完成者（刻意保留的已知竞态）
        let content = &app.panes.pane(Section::Basics).unwrap().content;
        assert_eq!(content.markdown, "# second\n");
        assert_eq!(content.slug.as_deref(), Some("basic-commands"));
    }

    #[test]
    fn loaded_result_for_home_is_dropped_silently() {
        let mut app = App::new();
        update(&mut app, loaded(Section::Home, "anything", "# body\n"));
        // 不 panic、不产生任何面板变化即为通过
        assert_eq!(app.current_section, Section::Home);
    }

    #[test]
    fn home_path_confirm_jumps_to_the_section() {
        let mut app = App::new();
        app.focus = crate::model::FocusPanel::Content;

        // 学习路径第一项是 History，向下一格到 Basics
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        update(&mut app, AppMessage::Content(ContentMessage::Confirm));

        assert_eq!(app.current_section, Section::Basics);
        assert_eq!(app.navigation.current_section(), Some(Section::Basics));
        assert_eq!(
            app.take_pending_loads(),
            vec![LoadRequest {
                section: Section::Basics,
                slug: "what-is-docker".to_string(),
            }]
        );
    }

    #[test]
    fn go_back_returns_home() {
        let mut app = App::new();
        enter_section(&mut app, Section::Advanced);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_section, Section::Home);
    }

    #[test]
    fn go_back_closes_the_modal_first() {
        let mut app = App::new();
        enter_section(&mut app, Section::Advanced);
        update(&mut app, AppMessage::ShowHelp);

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert_eq!(app.current_section, Section::Advanced);
    }

    #[test]
    fn reload_requeues_the_active_topic() {
        let mut app = App::new();
        enter_section(&mut app, Section::Practical);
        app.take_pending_loads();

        update(&mut app, AppMessage::Reload);
        assert_eq!(
            app.take_pending_loads(),
            vec![LoadRequest {
                section: Section::Practical,
                slug: "hello-world".to_string(),
            }]
        );
    }
}
