//! 搜索框组件

use bookdesk_core::services::MIN_SEARCH_LEN;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = app.controller.search_text();
    let focused = app.focus.is_search();

    let block = Block::default()
        .title(" Search (title or author) ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let mut spans = vec![Span::styled(text.to_string(), Style::default().fg(c.fg))];
    let typed = text.trim().chars().count();
    if typed > 0 && text.chars().count() < MIN_SEARCH_LEN {
        spans.push(Span::styled(
            format!("   type at least {MIN_SEARCH_LEN} characters"),
            Style::default().fg(c.muted),
        ));
    }

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if focused {
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            inner.x.saturating_add(width).min(inner.right().saturating_sub(1)),
            inner.y,
        ));
    }
}
