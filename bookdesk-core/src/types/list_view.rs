//! Displayed rows and their presentation order

use std::cmp::Ordering;
use std::collections::HashSet;

use bookdesk_gateway::{Book, BookId};
use serde::{Deserialize, Serialize};

/// Column a user can sort the table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    Title,
    Author,
    Isbn,
    PublishedDate,
}

impl SortColumn {
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Title,
        Self::Author,
        Self::Isbn,
        Self::PublishedDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Isbn => "ISBN",
            Self::PublishedDate => "Published",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active comparator chosen through column header clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        let ordering = match self.column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Title => compare_text(&a.title, &b.title),
            SortColumn::Author => compare_text(&a.author, &b.author),
            SortColumn::Isbn => a.isbn.cmp(&b.isbn),
            SortColumn::PublishedDate => a.published_date.cmp(&b.published_date),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Case-insensitive first, exact second, so the order is total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// What the table currently shows.
///
/// `records` keeps the canonical order (server order, then incremental
/// changes). Sorting is a view over it via [`rows`](Self::rows) and never
/// reorders the canonical sequence. Every identifier appears at most once and
/// all matching is by identifier.
#[derive(Debug, Default, Clone)]
pub struct ListViewState {
    records: Vec<Book>,
    sort: Option<SortOrder>,
    selected: Option<BookId>,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 查询 =====

    /// Canonical sequence.
    pub fn records(&self) -> &[Book] {
        &self.records
    }

    /// Presentation sequence: canonical order, stably sorted by the active
    /// comparator if any.
    pub fn rows(&self) -> Vec<&Book> {
        let mut rows: Vec<&Book> = self.records.iter().collect();
        if let Some(order) = self.sort {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.records.iter().find(|b| b.id == id)
    }

    /// Index of `id` in the canonical sequence.
    pub fn position_of(&self, id: BookId) -> Option<usize> {
        self.records.iter().position(|b| b.id == id)
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    pub fn selected(&self) -> Option<BookId> {
        self.selected
    }

    // ===== 选择 =====

    pub fn select(&mut self, id: BookId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ===== 排序 =====

    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        self.sort = sort;
    }

    /// Header click: unsorted → ascending → descending → unsorted.
    ///
    /// Clicking a column other than the active one starts at ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some(SortOrder {
                column: active,
                direction: SortDirection::Ascending,
            }) if active == column => Some(SortOrder {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortOrder {
                column: active,
                direction: SortDirection::Descending,
            }) if active == column => None,
            _ => Some(SortOrder::ascending(column)),
        };
    }

    // ===== 变更 =====

    /// Replace the whole sequence after a list or search.
    ///
    /// Later duplicates of an identifier are dropped. A selection that is no
    /// longer displayed is cleared.
    pub fn apply_full_replace(&mut self, records: Vec<Book>) {
        let mut seen = HashSet::with_capacity(records.len());
        let total = records.len();
        self.records = records.into_iter().filter(|b| seen.insert(b.id)).collect();
        if self.records.len() != total {
            log::warn!(
                "Dropped {} duplicate book(s) from server response",
                total - self.records.len()
            );
        }
        if let Some(id) = self.selected {
            if self.get(id).is_none() {
                self.selected = None;
            }
        }
    }

    /// Append a newly created record.
    ///
    /// If the identifier is already displayed the existing row is replaced in
    /// place instead.
    pub fn apply_insert(&mut self, book: Book) {
        if let Some(index) = self.position_of(book.id) {
            log::debug!("Book {} already displayed, replacing in place", book.id);
            self.records[index] = book;
        } else {
            self.records.push(book);
        }
    }

    /// Replace the row with the same identifier, keeping its position.
    ///
    /// Returns `false` (and changes nothing) if the identifier is not displayed.
    pub fn apply_replace(&mut self, book: Book) -> bool {
        match self.position_of(book.id) {
            Some(index) => {
                self.records[index] = book;
                true
            }
            None => {
                log::debug!("Book {} not displayed, nothing to replace", book.id);
                false
            }
        }
    }

    /// Remove the row with `id`. Removing the selected row clears the selection.
    pub fn apply_remove(&mut self, id: BookId) -> bool {
        let Some(index) = self.position_of(id) else {
            log::debug!("Book {id} not displayed, nothing to remove");
            return false;
        };
        self.records.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        true
    }
}
