//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(section) = app.navigation.current_section() {
                super::enter_section(app, section);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.selected = 0;
        }

        NavigationMessage::SelectLast => {
            let len = app.navigation.items.len();
            if len > 0 {
                app.navigation.selected = len - 1;
            }
        }
    }
}
