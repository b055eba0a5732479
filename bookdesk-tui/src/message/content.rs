//! 面板消息
//!
//! 搜索框、图书表格和编辑表单内的操作

use bookdesk_core::types::SortColumn;

/// 面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 搜索框 ==========
    /// 输入字符
    SearchInput(char),
    /// 删除最后一个字符
    SearchBackspace,
    /// 清空搜索框
    SearchClear,

    // ========== 图书表格 ==========
    /// 选择上一行
    SelectPrevious,
    /// 选择下一行
    SelectNext,
    /// 跳转到第一行
    SelectFirst,
    /// 跳转到最后一行
    SelectLast,
    /// 切换列排序
    ToggleSort(SortColumn),

    // ========== 编辑表单 ==========
    /// 下一个字段
    FieldNext,
    /// 上一个字段
    FieldPrev,
    /// 输入字符
    FieldInput(char),
    /// 删除最后一个字符
    FieldBackspace,
}
