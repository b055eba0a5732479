//! 编辑表单组件

use bookdesk_core::services::{MutationKind, MutationPhase};
use bookdesk_core::types::FormField;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 标签列宽度
const LABEL_WIDTH: usize = 16;

/// 渲染编辑表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = app.controller.form();
    let editor = &app.form_editor;
    let focused = app.focus.is_form();

    let title = match form.editing() {
        Some(id) => format!(" Edit Book #{id} "),
        None => " New Book ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let active = focused && editor.active() == field;
        let marker = if active { "▶ " } else { "  " };
        let label_style = if active {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        let value = editor.display(form, field);
        let value_style = if field == FormField::PublishedDate && editor.date_is_partial() {
            Style::default().fg(c.warning)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(
                format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(value.to_string(), value_style),
        ]));
    }

    lines.push(Line::from(""));
    if editor.date_is_partial() {
        lines.push(Line::styled(
            "  Published date must be YYYY-MM-DD",
            Style::default().fg(c.warning),
        ));
    }
    if let Some(line) = activity_line(app) {
        lines.push(line);
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );

    if focused {
        let row = FormField::ALL
            .iter()
            .position(|f| *f == editor.active())
            .unwrap_or(0);
        let typed = editor.display(form, editor.active()).chars().count();
        let x = inner.x as usize + 2 + LABEL_WIDTH + typed;
        frame.set_cursor_position(Position::new(
            u16::try_from(x)
                .unwrap_or(u16::MAX)
                .min(inner.right().saturating_sub(1)),
            inner.y + u16::try_from(row).unwrap_or(0),
        ));
    }
}

/// 请求进度提示
fn activity_line(app: &App) -> Option<Line<'static>> {
    let c = colors();
    if let MutationPhase::Submitting(kind) = app.controller.mutation_phase() {
        let text = match kind {
            MutationKind::Create => "  Adding book…",
            MutationKind::Update => "  Saving changes…",
            MutationKind::Delete => "  Deleting book…",
        };
        return Some(Line::styled(text, Style::default().fg(c.success)));
    }
    app.controller.selection().fetching().map(|id| {
        Line::styled(
            format!("  Fetching book #{id}…"),
            Style::default().fg(c.muted),
        )
    })
}
