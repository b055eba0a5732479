//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 窗口标题
pub const APP_TITLE: &str = "Library Management System";

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 搜索框 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(6),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::search::render(app, frame, main_layout[1]);

    // 左右分栏：表格 + 表单
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_layout[2]);

    pages::books::render(app, frame, columns[0]);
    components::book_form::render(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::raw(format!(" {APP_TITLE}")),
        Span::styled(format!("  {}", app.server), Style::default().fg(c.muted)),
    ]);
    let title = Paragraph::new(line).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
