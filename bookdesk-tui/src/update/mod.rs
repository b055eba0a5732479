//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 书目相关的变更一律通过 BookController 的入口完成，
//! 网络请求在后台执行，结果由主循环中的 app.pump() 应用。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 面板子消息处理（搜索框、表格、表单）
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!     消息与控制器入口的对应：
//!         AppMessage::Create              → on_submit_create()
//!         AppMessage::Update              → on_submit_update()
//!         AppMessage::Delete              → on_submit_delete()
//!         AppMessage::Refresh             → on_refresh()
//!         AppMessage::ClearSelection      → on_selection_cleared()
//!         ContentMessage::SearchInput     → on_search_text_changed()
//!         ContentMessage::Select*         → on_row_selected()
//!         ContentMessage::ToggleSort      → toggle_sort()
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;

use bookdesk_core::BookController;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            app.focus = app.focus.next();
        }

        AppMessage::FocusPrev => {
            app.focus = app.focus.prev();
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::CloseModal => {
            app.modal.close();
        }

        AppMessage::Create => {
            app.with_controller(BookController::on_submit_create);
        }

        AppMessage::Update => {
            app.with_controller(BookController::on_submit_update);
        }

        AppMessage::Delete => {
            app.with_controller(BookController::on_submit_delete);
        }

        AppMessage::Refresh => {
            app.table_cursor = 0;
            app.clear_status();
            app.with_controller(BookController::on_refresh);
        }

        AppMessage::ClearSelection => {
            app.with_controller(BookController::on_selection_cleared);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ContentMessage;
    use crate::model::FocusPanel;
    use crate::test_support::test_app;

    #[test]
    fn quit_sets_flag() {
        let mut app = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_cycles() {
        let mut app = test_app();
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Form);
        update(&mut app, AppMessage::FocusPrev);
        update(&mut app, AppMessage::FocusPrev);
        assert_eq!(app.focus, FocusPanel::Search);
    }

    #[test]
    fn invalid_create_opens_dialog() {
        tokio_test::block_on(async {
            let mut app = test_app();
            app.focus = FocusPanel::Form;
            for c in "Dune".chars() {
                update(&mut app, AppMessage::Content(ContentMessage::FieldInput(c)));
            }

            update(&mut app, AppMessage::Create);
            app.pump();

            let shown = app.modal.active().map(|n| (n.title.clone(), n.body.clone()));
            assert_eq!(
                shown,
                Some((
                    "Invalid Fields".to_string(),
                    "Author is required!\nISBN is required!\nPublished date is required!"
                        .to_string()
                ))
            );

            update(&mut app, AppMessage::CloseModal);
            assert!(!app.modal.is_open());
            assert_eq!(app.controller.form().title, "Dune");
        });
    }

    #[test]
    fn update_without_selection_is_rejected() {
        tokio_test::block_on(async {
            let mut app = test_app();
            update(&mut app, AppMessage::Update);
            app.pump();
            assert_eq!(
                app.modal.active().map(|n| n.title.as_str()),
                Some("No Selection")
            );
        });
    }

    #[test]
    fn refresh_resets_form_and_date_buffer() {
        tokio_test::block_on(async {
            let mut app = test_app();
            app.focus = FocusPanel::Form;
            update(&mut app, AppMessage::Content(ContentMessage::FieldInput('x')));
            update(&mut app, AppMessage::Content(ContentMessage::FieldPrev));
            for c in "2001-01-01".chars() {
                update(&mut app, AppMessage::Content(ContentMessage::FieldInput(c)));
            }
            assert!(app.controller.form().published_date.is_some());

            update(&mut app, AppMessage::Refresh);

            assert!(app.controller.form().title.is_empty());
            assert!(app.controller.form().published_date.is_none());
            assert_eq!(
                app.form_editor
                    .display(app.controller.form(), app.form_editor.active()),
                ""
            );
            assert!(app.controller.is_loading());
        });
    }
}
