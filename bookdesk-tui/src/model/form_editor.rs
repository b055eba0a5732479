//! 表单编辑光标
//!
//! 文本字段直接编辑 `FormState`；出版日期先写入文本缓冲区，
//! 只有完整的 `YYYY-MM-DD` 才会写入 `FormState::published_date`。

use bookdesk_core::types::{FormField, FormState};
use chrono::NaiveDate;

/// 出版日期的输入格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 表单编辑状态
#[derive(Debug, Clone, Default)]
pub struct FormEditor {
    /// 当前编辑的字段
    active: usize,
    /// 出版日期输入缓冲区
    date_text: String,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> FormField {
        FormField::ALL[self.active]
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % FormField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.active = (self.active + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// 字段的显示文本
    pub fn display<'a>(&'a self, form: &'a FormState, field: FormField) -> &'a str {
        match field {
            FormField::Title => &form.title,
            FormField::Author => &form.author,
            FormField::Isbn => &form.isbn,
            FormField::PublishedDate => &self.date_text,
        }
    }

    /// 已输入但无法解析的日期
    pub fn date_is_partial(&self) -> bool {
        !self.date_text.is_empty() && parse_date(&self.date_text).is_none()
    }

    pub fn input(&mut self, form: &mut FormState, c: char) {
        match self.active() {
            FormField::Title => form.title.push(c),
            FormField::Author => form.author.push(c),
            FormField::Isbn => form.isbn.push(c),
            FormField::PublishedDate => {
                if c.is_ascii_digit() || c == '-' {
                    self.date_text.push(c);
                    form.published_date = parse_date(&self.date_text);
                }
            }
        }
    }

    pub fn backspace(&mut self, form: &mut FormState) {
        match self.active() {
            FormField::Title => {
                form.title.pop();
            }
            FormField::Author => {
                form.author.pop();
            }
            FormField::Isbn => {
                form.isbn.pop();
            }
            FormField::PublishedDate => {
                self.date_text.pop();
                form.published_date = parse_date(&self.date_text);
            }
        }
    }

    /// 表单被控制器改写（填充或清空）后，重置日期缓冲区
    pub fn sync_from(&mut self, form: &FormState) {
        self.date_text = form
            .published_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}
