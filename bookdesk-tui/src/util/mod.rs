//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关，负责终端的初始化和恢复。
//!
//!
//!     初始化终端（init_terminal）：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显
//!         · Alternate Screen（备用屏幕）
//!             - 退出后自动恢复主屏幕内容
//!         · panic hook
//!             - panic 时先离开备用屏幕，保证错误信息可见
//!
//!
//!     恢复终端（restore_terminal）：
//!         无论 app::run 成功与否，main.rs 都会先恢复终端，再返回结果。
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
