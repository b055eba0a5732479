//! 图书表格页面视图

use bookdesk_core::types::{SortColumn, SortDirection};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 各列宽度，顺序与 `SortColumn::ALL` 一致
const WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Length(17),
    Constraint::Length(12),
];

/// 渲染图书表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = app.controller.list();
    let title = if app.controller.is_loading() {
        format!(" Books ({}) · loading… ", list.len())
    } else {
        format!(" Books ({}) ", list.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_table()));

    if list.is_empty() {
        render_empty(app, frame, block, area);
    } else {
        render_table(app, frame, block, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, block: Block, area: Rect) {
    let c = colors();
    let message = if app.controller.is_loading() {
        "  Loading books…"
    } else if app.controller.search_text().trim().is_empty() {
        "  No books yet. Fill in the form and press Alt+a to add one."
    } else {
        "  No books match the search."
    };

    let content = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// 渲染图书列表
fn render_table(app: &App, frame: &mut Frame, block: Block, area: Rect) {
    let c = colors();
    let list = app.controller.list();

    let header = Row::new(SortColumn::ALL.iter().enumerate().map(|(i, column)| {
        let marker = match list.sort() {
            Some(order) if order.column == *column => match order.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            },
            _ => "",
        };
        Cell::from(format!("{} {}{marker}", i + 1, column.label()))
    }))
    .style(
        Style::default()
            .fg(c.warning)
            .add_modifier(Modifier::BOLD),
    );

    let rows = list.rows().into_iter().map(|book| {
        Row::new(vec![
            Cell::from(book.id.to_string()),
            Cell::from(book.title.clone()),
            Cell::from(book.author.clone()),
            Cell::from(book.isbn.clone()),
            Cell::from(book.published_date.to_string()),
        ])
        .style(Style::default().fg(c.fg))
    });

    // 选中记录正在重新获取时使用弱化的高亮
    let highlight = if app.controller.selection().fetching().is_some() {
        Style::default().bg(c.border).fg(c.selected_fg)
    } else {
        Styles::selected()
    };

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(list.selected().and(app.table_position()));

    frame.render_stateful_widget(table, area, &mut state);
}
