//! 异步加载派发器
//!
//! 把主循环取出的 `LoadRequest` 派发到 tokio 运行时上执行，
//! 完成后以 `ContentMessage::Loaded` 经 channel 送回主循环。

use std::sync::Arc;

use learning_hub_core::ContentService;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, ContentMessage};
use crate::model::LoadRequest;

/// 内容加载派发器
pub struct ContentLoader {
    service: Arc<ContentService>,
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl ContentLoader {
    /// 创建加载派发器
    pub fn new(
        service: Arc<ContentService>,
        handle: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            service,
            handle,
            tx,
        }
    }

    /// 派发一次加载
    ///
    /// `ContentService::load` 不会失败（内部回退到占位内容），
    /// send 失败只可能发生在主循环已退出时，此时结果已无人关心。
    pub fn request(&self, request: LoadRequest) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let content = service.load(request.section, &request.slug).await;
            let _ = tx.send(AppMessage::Content(ContentMessage::Loaded(content)));
        });
    }
}
