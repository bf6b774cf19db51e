//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁：
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//! 除了键盘事件翻译出的消息之外，Backend 层的内容加载完成后
//! 也会通过 channel 把 `ContentMessage::Loaded` 送回主循环。

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
