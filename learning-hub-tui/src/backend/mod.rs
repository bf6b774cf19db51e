//! Backend 层：内容加载与配置
//!
//! Backend 层与 UI 完全解耦，通过 learning-hub-core 库完成课程解析。
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod content_loader;     // 异步加载派发器
//!         mod config_service;     // 配置持久化（JSON 文件）
//!         mod source;             // 课程文件源（content/ 目录）
//!
//! 数据流：
//!     Update 层排队 LoadRequest
//!         ↓
//!     主循环调用 ContentLoader::request
//!         ↓
//!     tokio 运行时上执行 ContentService::load（文件 → 占位内容回退）
//!         ↓
//!     结果以 ContentMessage::Loaded 经 channel 回到主循环
//!         ↓
//!     Update 层写入对应面板，View 层下一轮渲染
//!
//! 多个请求可以同时在途；这里不做取消也不做序号保护，
//! 后完成者覆盖先完成者。

mod config_service;
mod content_loader;
mod source;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use content_loader::ContentLoader;
pub use source::FsTopicSource;
