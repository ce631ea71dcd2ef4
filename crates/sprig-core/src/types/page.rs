//! The paginated envelope and the one-or-many fetch result.

use serde::{Deserialize, Serialize};

/// One page of collection results.
///
/// The envelope fields (`count`, `previous`, `next`) pass through from the
/// server unchanged; only the results themselves are normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// Records on this page, in server order
    pub results: Vec<T>,
}

/// Result of a fetch call: a single entity, or a page of them.
///
/// The same fetch signature serves both modes; which one comes back is
/// decided solely by the selector (`Selector::All` yields a page).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fetched<T> {
    /// A single entity, from an ID or name selector
    One(T),
    /// A page of entities, from the `All` selector
    Page(Page<T>),
}

impl<T> Fetched<T> {
    /// True when this result is a paginated collection
    pub fn is_page(&self) -> bool {
        matches!(self, Fetched::Page(_))
    }

    /// Unwrap the single entity, if this result holds one
    pub fn into_one(self) -> Option<T> {
        match self {
            Fetched::One(entity) => Some(entity),
            Fetched::Page(_) => None,
        }
    }

    /// Unwrap the page, if this result holds one
    pub fn into_page(self) -> Option<Page<T>> {
        match self {
            Fetched::One(_) => None,
            Fetched::Page(page) => Some(page),
        }
    }
}
