//! Edit form state and validation

use bookdesk_gateway::{Book, BookDraft, BookId};
use chrono::NaiveDate;
use serde::Serialize;

/// Editable form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormField {
    Title,
    Author,
    Isbn,
    PublishedDate,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::Isbn, Self::PublishedDate];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Isbn => "ISBN",
            Self::PublishedDate => "Published date",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required!",
            Self::Author => "Author is required!",
            Self::Isbn => "ISBN is required!",
            Self::PublishedDate => "Published date is required!",
        }
    }
}

/// Every field that failed validation on one submit attempt.
///
/// Renders as a single message with one line per violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    fields: Vec<FormField>,
}

impl ValidationErrors {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(field.required_message())?;
        }
        Ok(())
    }
}

/// The four editable fields plus the record they are bound to.
///
/// `editing == None` means create mode. Only [`populate`](Self::populate)
/// binds the form to a record, and only from a freshly fetched copy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: Option<NaiveDate>,
    editing: Option<BookId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the form is bound to, `None` in create mode.
    pub fn editing(&self) -> Option<BookId> {
        self.editing
    }

    pub fn is_create_mode(&self) -> bool {
        self.editing.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn populate(&mut self, book: &Book) {
        self.title.clone_from(&book.title);
        self.author.clone_from(&book.author);
        self.isbn.clone_from(&book.isbn);
        self.published_date = Some(book.published_date);
        self.editing = Some(book.id);
    }

    /// Check all fields at once and build a draft from the trimmed values.
    pub fn validate(&self) -> Result<BookDraft, ValidationErrors> {
        let mut fields = Vec::new();
        let title = required(&self.title, FormField::Title, &mut fields);
        let author = required(&self.author, FormField::Author, &mut fields);
        let isbn = required(&self.isbn, FormField::Isbn, &mut fields);
        if self.published_date.is_none() {
            fields.push(FormField::PublishedDate);
        }

        match (title, author, isbn, self.published_date) {
            (Some(title), Some(author), Some(isbn), Some(published_date)) => Ok(BookDraft {
                title,
                author,
                isbn,
                published_date,
            }),
            _ => Err(ValidationErrors { fields }),
        }
    }
}

fn required(value: &str, field: FormField, violations: &mut Vec<FormField>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(field);
        None
    } else {
        Some(trimmed.to_string())
    }
}
