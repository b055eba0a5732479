//! 弹窗状态
//!
//! 控制器发出的通知按到达顺序排队，每次显示一条。

use std::collections::VecDeque;

use bookdesk_core::Notification;

#[derive(Debug, Default)]
pub struct ModalState {
    queue: VecDeque<Notification>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// 当前显示的通知
    pub fn active(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// 排队等待显示的通知数（不含当前）
    pub fn waiting(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }

    /// 关闭当前通知，显示下一条
    pub fn close(&mut self) {
        self.queue.pop_front();
    }
}
