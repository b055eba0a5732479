//! 通用组件

pub mod book_form;
pub mod modal;
pub mod search;
pub mod statusbar;
