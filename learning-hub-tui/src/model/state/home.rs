//! 首页（学习路径）状态

use learning_hub_core::Section;

/// 首页状态
///
/// 学习路径是课程 Section 的有序列表，
/// 在首页按 Enter 直接跳到对应 Section 并加载其默认主题。
#[derive(Debug)]
pub struct HomeState {
    /// 当前选中的路径项索引
    pub selected: usize,
}

impl HomeState {
    /// 创建首页状态
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// 学习路径条目（即全部课程 Section，按推荐顺序）
    pub fn path() -> &'static [Section] {
        Section::lessons()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < Self::path().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 当前选中的 Section
    pub fn selected_section(&self) -> Option<Section> {
        Self::path().get(self.selected).copied()
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}
