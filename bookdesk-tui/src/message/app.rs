//! 应用主消息枚举

use super::ContentMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点切换到下一个面板（Tab）
    FocusNext,

    /// 焦点切换到上一个面板（Shift+Tab）
    FocusPrev,

    /// 面板内的消息
    Content(ContentMessage),

    /// 关闭当前通知弹窗
    CloseModal,

    /// 以表单内容新增图书
    Create,

    /// 以表单内容更新选中的图书
    Update,

    /// 删除选中的图书
    Delete,

    /// 重新执行当前查询并清空表单
    Refresh,

    /// 取消选中
    ClearSelection,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
