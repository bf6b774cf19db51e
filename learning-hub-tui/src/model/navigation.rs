//! 导航状态定义

use learning_hub_core::Section;

/// 导航项
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub section: Section,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态（Section 枚举序即导航序）
    pub fn new() -> Self {
        let items = Section::all()
            .iter()
            .map(|&section| NavItem {
                section,
                icon: Self::icon_for(section),
            })
            .collect();
        Self { items, selected: 0 }
    }

    fn icon_for(section: Section) -> &'static str {
        match section {
            Section::Home => "⌂",
            Section::History => "◷",
            Section::Basics => "●",
            Section::Advanced => "▲",
            Section::Security => "⛨",
            Section::Practical => "+",
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 获取当前选中的 Section
    pub fn current_section(&self) -> Option<Section> {
        self.items.get(self.selected).map(|item| item.section)
    }

    /// 把高亮同步到指定 Section（供首页学习路径跳转使用）
    pub fn sync_to(&mut self, section: Section) {
        if let Some(index) = self.items.iter().position(|item| item.section == section) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
