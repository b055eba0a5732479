//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - Ctrl+C 任何时候都退出
//!                 - 有弹窗打开时，只接受 Esc / Enter 关闭弹窗
//!                 - 全局快捷键（Alt+a/u/d/r/q、Esc、Tab、Shift+Tab），就地处理
//!                 - 焦点位于搜索框，调用 handle_search_keys
//!                 - 焦点位于表格，调用 handle_table_keys
//!                 - 焦点位于表单，调用 handle_form_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         Tab / Shift+Tab     切换焦点
//!         Alt+a               新增（表单内容）
//!         Alt+u               更新选中的图书
//!         Alt+d               删除选中的图书
//!         Alt+r               刷新
//!         Esc                 取消选中
//!         Alt+q / Ctrl+C      退出
//!
//!     表格：
//!         ↑↓ / k j            上下移动并选中
//!         Home / End          第一行 / 最后一行
//!         1-5                 按 ID / 书名 / 作者 / ISBN / 出版日期 排序
//!
//!     表单：
//!         ↑↓ / Enter          切换字段
//!         字符 / Backspace     编辑当前字段
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
