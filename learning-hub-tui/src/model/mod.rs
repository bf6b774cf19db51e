//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 这一层只包含纯数据结构，不包含任何业务逻辑；
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态 + 焦点枚举 + 加载队列
//!         mod navigation;     // 导航栏状态
//!
//!         pub mod state;      // 各内容面板状态
//!
//! 与导航不同，每个课程 Section 都保留自己的面板状态（激活的主题、
//! 已加载的正文、滚动位置），切换 Section 时不会丢失 —— 同一时刻
//! 只有 `App::current_section` 指向的那一个面板可见。

mod app;
mod navigation;

pub mod state;

pub use app::{App, FocusPanel, LoadRequest};
pub use navigation::{NavItem, NavigationState};
pub use state::{ContentState, HomeState, LoadStatus, Modal, ModalState, PaneState, Panes};
