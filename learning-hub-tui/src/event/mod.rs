//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message：
//!     poll_event        轮询输入（受 app.rs 主循环调用）
//!     handle_event      按弹窗 → 全局快捷键 → 焦点面板的顺序分发
//!
//! Event 层只翻译、不修改状态；产生的 `AppMessage`
//! 由主循环传入 Update 层处理。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
