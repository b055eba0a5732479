//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 书目数据本身（列表、选中项、表单、进行中的请求）全部归
//! `bookdesk_core::BookController` 所有，Model 层只补充终端界面需要的状态。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Table / Form）
//!         mod form_editor;    // 表单光标与日期输入缓冲区
//!         mod modal;          // 通知弹窗队列
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,              // 退出标志
//!         pub focus: FocusPanel,              // 当前焦点
//!         pub controller: BookController,     // 同步控制器
//!         pub form_editor: FormEditor,        // 表单光标
//!         pub modal: ModalState,              // 通知弹窗
//!         pub status_message: Option<String>, // 状态栏消息
//!         ...
//!     }
//!
//!     使用：
//!         - 在 main.rs 中创建：App::new(controller, notifications, server)
//!         - 在 app.rs 主循环中：app.pump() 应用已完成的请求
//!         - 在 update/ 中修改，在 view/ 中读取
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单与控制器
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     文本字段直接写入 controller.form_mut()。
//!     控制器自己也会改写表单（选中记录后填充、提交成功后清空），
//!     所以调用控制器入口时要经过 App::with_controller，
//!     它在表单被改写后重置日期输入缓冲区。
//!

mod app;
mod focus;
mod form_editor;
mod modal;

pub use app::App;
pub use focus::FocusPanel;
pub use form_editor::FormEditor;
pub use modal::ModalState;
