//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use bookdesk_core::types::SortColumn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage};
use crate::model::{App, FocusPanel};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗打开时只接受关闭
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Create;
    }
    if DefaultKeymap::ACTION_UPDATE.matches(&key) {
        return AppMessage::Update;
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Delete;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearSelection;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if DefaultKeymap::FOCUS_PREV.matches(&key) {
        return AppMessage::FocusPrev;
    }

    // 根据焦点位置处理按键
    let msg = match app.focus {
        FocusPanel::Search => handle_search_keys(key),
        FocusPanel::Table => handle_table_keys(key),
        FocusPanel::Form => handle_form_keys(key),
    };
    msg.map_or(AppMessage::Noop, AppMessage::Content)
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::NAV_CONFIRM.matches(&key) {
        AppMessage::CloseModal
    } else {
        AppMessage::Noop
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> Option<ContentMessage> {
    match key.code {
        KeyCode::Backspace => Some(ContentMessage::SearchBackspace),
        KeyCode::Delete => Some(ContentMessage::SearchClear),
        KeyCode::Char(c) if is_text_input(&key) => Some(ContentMessage::SearchInput(c)),
        _ => None,
    }
}

/// 处理图书表格的按键
fn handle_table_keys(key: KeyEvent) -> Option<ContentMessage> {
    if DefaultKeymap::NAV_UP.matches(&key) {
        return Some(ContentMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return Some(ContentMessage::SelectNext);
    }
    if DefaultKeymap::NAV_FIRST.matches(&key) {
        return Some(ContentMessage::SelectFirst);
    }
    if DefaultKeymap::NAV_LAST.matches(&key) {
        return Some(ContentMessage::SelectLast);
    }

    match key.code {
        KeyCode::Char('k') => Some(ContentMessage::SelectPrevious),
        KeyCode::Char('j') => Some(ContentMessage::SelectNext),
        // 1-5: 按列排序
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Some(ContentMessage::ToggleSort(SortColumn::ALL[index]))
        }
        _ => None,
    }
}

/// 处理编辑表单的按键
fn handle_form_keys(key: KeyEvent) -> Option<ContentMessage> {
    if DefaultKeymap::NAV_UP.matches(&key) {
        return Some(ContentMessage::FieldPrev);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return Some(ContentMessage::FieldNext);
    }

    match key.code {
        KeyCode::Backspace => Some(ContentMessage::FieldBackspace),
        KeyCode::Char(c) if is_text_input(&key) => Some(ContentMessage::FieldInput(c)),
        _ => None,
    }
}

/// 无修饰键或仅 Shift 的字符才是文本输入
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn plain(c: char) -> Event {
        press(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn characters_follow_focus() {
        let mut app = test_app();

        app.focus = FocusPanel::Search;
        assert_eq!(
            handle_event(plain('d'), &app),
            AppMessage::Content(ContentMessage::SearchInput('d'))
        );

        app.focus = FocusPanel::Form;
        assert_eq!(
            handle_event(press(KeyCode::Char('D'), KeyModifiers::SHIFT), &app),
            AppMessage::Content(ContentMessage::FieldInput('D'))
        );

        app.focus = FocusPanel::Table;
        assert_eq!(
            handle_event(plain('3'), &app),
            AppMessage::Content(ContentMessage::ToggleSort(SortColumn::Author))
        );
        assert_eq!(handle_event(plain('x'), &app), AppMessage::Noop);
    }

    #[test]
    fn actions_work_from_any_panel() {
        let mut app = test_app();
        for focus in [FocusPanel::Search, FocusPanel::Table, FocusPanel::Form] {
            app.focus = focus;
            let alt = |c| press(KeyCode::Char(c), KeyModifiers::ALT);
            assert_eq!(handle_event(alt('a'), &app), AppMessage::Create);
            assert_eq!(handle_event(alt('u'), &app), AppMessage::Update);
            assert_eq!(handle_event(alt('d'), &app), AppMessage::Delete);
            assert_eq!(handle_event(alt('r'), &app), AppMessage::Refresh);
            assert_eq!(handle_event(alt('q'), &app), AppMessage::Quit);
        }
    }

    #[test]
    fn open_modal_swallows_keys() {
        let mut app = test_app();
        app.modal
            .push(bookdesk_core::Notification::info("Success", "done"));

        assert_eq!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::CloseModal
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_app();
        let mut key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
        assert_eq!(handle_event(Event::Resize(80, 24), &app), AppMessage::Noop);
    }

    #[test]
    fn escape_clears_selection() {
        let app = test_app();
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::ClearSelection
        );
    }
}
