//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model（以及控制器暴露的状态），不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 搜索框 + 表格/表单 + 状态栏
//!         mod components;     // 搜索框、表单、状态栏、通知弹窗
//!         mod pages;          // 图书表格
//!         pub mod theme;      // 颜色和样式
//!
//!
//!     ┌──────────────────── Library Management System ────────────────────┐
//!     │ Search                                                            │
//!     ├───────────────────────────────────────────┬───────────────────────┤
//!     │ Books                                     │ New Book / Edit Book  │
//!     │  ID  Title  Author  ISBN  Published       │  Title:               │
//!     │                                           │  Author:              │
//!     │                                           │  ISBN:                │
//!     │                                           │  Published date:      │
//!     ├───────────────────────────────────────────┴───────────────────────┤
//!     │ 状态栏：快捷键提示 + 请求状态                                        │
//!     └───────────────────────────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
