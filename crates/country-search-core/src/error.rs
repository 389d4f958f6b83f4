// crates/country-search-core/src/error.rs

use thiserror::Error;

/// Errors produced by the name loader and the filter store.
///
/// The load variants (`NotFound`, `Io`, `Json`, `EmptySource`, `Unsupported`)
/// are terminal for the process: callers show one notice and continue with
/// an empty [`NameFilterStore`](crate::store::NameFilterStore).
/// [`SearchError::IndexOutOfBounds`] is a contract violation by the renderer.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Name list not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Name list is empty: {0}")]
    EmptySource(String),

    #[error("Unsupported name list: {0}")]
    Unsupported(String),

    #[error("Row {index} is out of bounds for a view of {len} names")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SearchError {
    /// `true` for every variant that can come out of a [`NameSource`](crate::traits::NameSource).
    pub fn is_load_error(&self) -> bool {
        !matches!(self, SearchError::IndexOutOfBounds { .. })
    }
}

/// Alias kept for callers that think of the whole crate as "the list".
pub type CountryListError = SearchError;

pub type Result<T> = std::result::Result<T, SearchError>;
