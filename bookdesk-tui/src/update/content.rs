//! 面板更新逻辑
//!
//! 处理搜索框、图书表格和编辑表单中的操作消息

use bookdesk_core::types::{SortDirection, SortOrder};

use crate::message::ContentMessage;
use crate::model::App;

/// 处理面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 搜索框 ==========
        ContentMessage::SearchInput(c) => {
            let mut text = app.controller.search_text().to_string();
            text.push(c);
            set_search_text(app, &text);
        }
        ContentMessage::SearchBackspace => {
            let mut text = app.controller.search_text().to_string();
            if text.pop().is_some() {
                set_search_text(app, &text);
            }
        }
        ContentMessage::SearchClear => {
            if !app.controller.search_text().is_empty() {
                set_search_text(app, "");
            }
        }

        // ========== 图书表格 ==========
        ContentMessage::SelectPrevious => {
            select_row(app, |current, _| current.map_or(0, |i| i.saturating_sub(1)));
        }
        ContentMessage::SelectNext => {
            select_row(app, |current, len| current.map_or(0, |i| (i + 1).min(len - 1)));
        }
        ContentMessage::SelectFirst => {
            select_row(app, |_, _| 0);
        }
        ContentMessage::SelectLast => {
            select_row(app, |_, len| len - 1);
        }
        ContentMessage::ToggleSort(column) => {
            app.controller.toggle_sort(column);
            let status = match app.controller.list().sort() {
                Some(SortOrder {
                    column,
                    direction: SortDirection::Ascending,
                }) => format!("Sorted by {} ▲", column.label()),
                Some(SortOrder {
                    column,
                    direction: SortDirection::Descending,
                }) => format!("Sorted by {} ▼", column.label()),
                None => "Original order".to_string(),
            };
            app.set_status(status);
        }

        // ========== 编辑表单 ==========
        ContentMessage::FieldNext => {
            app.form_editor.next_field();
        }
        ContentMessage::FieldPrev => {
            app.form_editor.prev_field();
        }
        ContentMessage::FieldInput(c) => {
            app.form_editor.input(app.controller.form_mut(), c);
        }
        ContentMessage::FieldBackspace => {
            app.form_editor.backspace(app.controller.form_mut());
        }
    }
}

fn set_search_text(app: &mut App, text: &str) {
    app.with_controller(|controller| controller.on_search_text_changed(text));
}

/// 选中表格中的一行（显示顺序下标）
///
/// 尚未选中时，任何移动都从光标所在行开始。
fn select_row(app: &mut App, target: impl FnOnce(Option<usize>, usize) -> usize) {
    let list = app.controller.list();
    let len = list.len();
    if len == 0 {
        return;
    }

    let current = list.selected().and(app.table_position());
    let index = match current {
        Some(_) => target(current, len),
        None => app.table_position().unwrap_or(0),
    };
    if current == Some(index) {
        return;
    }

    let Some(id) = list.rows().get(index).map(|b| b.id) else {
        return;
    };
    app.table_cursor = index;
    app.with_controller(|controller| controller.on_row_selected(id));
}
