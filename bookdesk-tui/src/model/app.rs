//! 应用主状态结构

use bookdesk_core::types::NotificationReceiver;
use bookdesk_core::{BookController, FormState};

use super::{FocusPanel, FormEditor, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 同步控制器，拥有列表、表单和所有请求状态
    pub controller: BookController,

    /// 控制器通知的接收端
    notifications: NotificationReceiver,

    /// 表单编辑光标
    pub form_editor: FormEditor,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 服务地址（标题栏显示）
    pub server: String,

    /// 未选中任何行时的表格光标
    pub table_cursor: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        controller: BookController,
        notifications: NotificationReceiver,
        server: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            controller,
            notifications,
            form_editor: FormEditor::new(),
            modal: ModalState::new(),
            status_message: None,
            server: server.into(),
            table_cursor: 0,
        }
    }

    /// 调用控制器；若表单被改写则同步日期缓冲区
    pub fn with_controller<R>(&mut self, f: impl FnOnce(&mut BookController) -> R) -> R {
        let before: FormState = self.controller.form().clone();
        let result = f(&mut self.controller);
        if *self.controller.form() != before {
            self.form_editor.sync_from(self.controller.form());
        }
        result
    }

    /// 应用已完成的请求并收取通知，每次主循环调用一次
    pub fn pump(&mut self) -> usize {
        let applied = self.with_controller(BookController::drain_completions);
        while let Ok(notification) = self.notifications.try_recv() {
            self.modal.push(notification);
        }
        applied
    }

    /// 表格中高亮的行（显示顺序下标）
    ///
    /// 有选中记录时跟随选中记录，否则使用光标。
    pub fn table_position(&self) -> Option<usize> {
        let list = self.controller.list();
        if list.is_empty() {
            return None;
        }
        let rows = list.rows();
        let selected = list
            .selected()
            .and_then(|id| rows.iter().position(|b| b.id == id));
        Some(selected.unwrap_or(self.table_cursor.min(rows.len() - 1)))
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
