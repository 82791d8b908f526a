//! Fixed-size paging over ordered listings.

use serde::Deserialize;

/// Number of questions on one page of any listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Returns `None` for page 0.
    pub fn new(page: usize) -> Option<Self> {
        (page >= 1).then_some(Page(page))
    }

    /// Interpret a raw `page` query value.
    ///
    /// Anything that is not a positive integer, including an absent value,
    /// falls back to the first page.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .and_then(Page::new)
            .unwrap_or(Page::FIRST)
    }

    pub fn number(&self) -> usize {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// `?page=N` query string shared by the listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Page {
        Page::from_query(self.page.as_deref())
    }
}

/// Slice `items` down to the requested page.
///
/// A page past the end yields an empty vector, never an error.
pub fn paginate<T: Clone>(items: &[T], page: Page, page_size: usize) -> Vec<T> {
    let start = (page.number() - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());
    items[start..end].to_vec()
}
