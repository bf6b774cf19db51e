//! 弹窗状态

/// 弹窗枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗，Some = 有弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }
}
