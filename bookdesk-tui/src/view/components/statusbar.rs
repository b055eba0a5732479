//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Enter/Esc", "Close")];
    }

    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Search => {
            hints.push(("Type", "Search"));
            hints.push(("Del", "Clear"));
        }
        FocusPanel::Table => {
            hints.push(("↑↓", "Select"));
            hints.push(("1-5", "Sort"));
        }
        FocusPanel::Form => {
            hints.push(("↑↓", "Field"));
        }
    }

    hints.push(("Alt+a", "Add"));
    hints.push(("Alt+u", "Update"));
    hints.push(("Alt+d", "Delete"));
    hints.push(("Alt+r", "Refresh"));
    hints.push(("Esc", "Deselect"));
    hints.push(("Alt+q", "Quit"));

    hints
}
