//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 调用控制器入口或修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息：退出、焦点、增删改、刷新
//!         mod content;        // 面板消息：搜索框、表格、表单
//!
//!
//!     在 app::AppMessage 中：
//!         pub enum AppMessage {
//!             Quit,                           // 退出应用
//!             FocusNext / FocusPrev,          // 切换焦点面板
//!             Content(ContentMessage),        // 面板子消息
//!             CloseModal,                     // 关闭通知
//!             Create / Update / Delete,       // 提交变更
//!             Refresh,                        // 刷新
//!             ClearSelection,                 // 取消选中
//!             Noop,                           // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;

pub use app::AppMessage;
pub use content::ContentMessage;
