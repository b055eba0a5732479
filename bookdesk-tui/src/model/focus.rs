//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 搜索框
    Search,
    /// 图书表格
    #[default]
    Table,
    /// 编辑表单
    Form,
}

impl FocusPanel {
    /// 按 Tab 顺序切换到下一个面板
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Table,
            FocusPanel::Table => FocusPanel::Form,
            FocusPanel::Form => FocusPanel::Search,
        }
    }

    /// 按 Shift+Tab 顺序切换到上一个面板
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Form,
            FocusPanel::Table => FocusPanel::Search,
            FocusPanel::Form => FocusPanel::Table,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    pub fn is_table(self) -> bool {
        matches!(self, FocusPanel::Table)
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }
}
