//! 应用主循环
//!
//! 每轮循环：
//!
//!     terminal.draw(..)            // 渲染 UI
//!     drain rx                     // 应用已完成的内容加载结果
//!     dispatch pending loads       // 派发 Update 层排队的加载请求
//!     poll_event(100ms)            // 轮询输入
//!     update(app, msg)             // 更新状态
//!
//! 内容加载在 tokio 运行时上执行，完成后通过 channel 送回主循环；
//! 多个请求可以同时在途，后完成者直接覆盖先完成者（与原始行为一致，
//! 不做序号保护）。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::ContentLoader;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    loader: &ContentLoader,
    mut rx: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台加载结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 4. 派发排队的加载请求
        for request in app.take_pending_loads() {
            loader.request(request);
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 7. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
