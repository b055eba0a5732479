//! 通知弹窗组件

use bookdesk_core::Notification;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染当前通知
pub fn render(app: &App, frame: &mut Frame) {
    let Some(notification) = app.modal.active() else {
        return;
    };
    render_notification(frame, notification, app.modal.waiting());
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_notification(frame: &mut Frame, notification: &Notification, waiting: usize) {
    let c = colors();
    let accent = if notification.is_error() {
        c.error
    } else {
        c.success
    };

    let body: Vec<&str> = notification.body.lines().collect();
    let height = u16::try_from(body.len()).unwrap_or(8).min(8) + 6;
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", notification.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(
        body.into_iter()
            .map(|text| Line::styled(text, Style::default().fg(c.fg))),
    );
    lines.push(Line::from(""));
    let footer = if waiting > 0 {
        format!("Press Esc or Enter to close ({waiting} more)")
    } else {
        "Press Esc or Enter to close".to_string()
    };
    lines.push(Line::styled(footer, Style::default().fg(c.muted)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
