//! Learning Hub TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 内容加载 (`backend/`)
//!
//! 程序入口：
//!
//!     init_terminal()         // 初始化终端
//!     App::new()              // 创建应用状态
//!     app::run()              // 运行主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! 课程内容按需从 `content/{section}/{file}.md` 异步加载；
//! 加载失败时回退到内置占位内容（见 learning-hub-core）。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use learning_hub_core::ContentService;
use tokio::sync::mpsc;

use backend::{ConfigService, ContentLoader, FsTopicSource, JsonConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 创建异步运行时（内容加载在后台线程上执行）
    let runtime = tokio::runtime::Runtime::new()?;

    // 2. 加载配置（失败时使用默认值）
    let config_service = JsonConfigService::new();
    let config = config_service.load().unwrap_or_default();
    view::theme::set_theme_index(config.theme_index());

    // 3. 组装内容加载管线：文件源 → 内容服务 → 加载器
    let source = Arc::new(FsTopicSource::new(config.content_root.clone()));
    let service = Arc::new(ContentService::new(source));
    let (tx, rx) = mpsc::unbounded_channel();
    let loader = ContentLoader::new(service, runtime.handle().clone(), tx);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &loader, rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 保存配置（主题可能被切换过）
    let mut config = config;
    config.set_theme_index(view::theme::current_theme_index());
    if let Err(err) = config_service.save(&config) {
        log::warn!("failed to save config: {err}");
    }

    // 8. 返回结果
    result
}
