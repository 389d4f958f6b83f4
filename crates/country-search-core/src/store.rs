// crates/country-search-core/src/store.rs

//! # Name Filter Store
//!
//! Owns the canonical, sorted list of names and the current query, and
//! derives the filtered view from the two. The host decides which view it
//! is displaying and passes that in as an [`ActiveMode`].

use crate::common::ListStats;
use crate::error::{Result, SearchError};
use crate::mode::ActiveMode;
use crate::text::{contains_folded, fold_case};
use crate::traits::NameSource;

/// Canonical name list plus the view filtered by the current query.
///
/// The canonical list is fixed at construction. [`set_query`](Self::set_query)
/// rebuilds the filtered view from scratch on every call, so the view is
/// always an order-preserving subsequence of the canonical list.
///
/// # Example
///
/// ```rust
/// use country_search_core::{ActiveMode, NameFilterStore};
///
/// let mut store = NameFilterStore::from_names(["France", "Chad", "Brazil", "Canada"]);
/// assert_eq!(store.set_query("ch"), ["Chad"]);
/// assert_eq!(store.count(ActiveMode::Searching), 1);
/// assert_eq!(store.count(ActiveMode::Browsing), 4);
/// assert_eq!(store.name_at(ActiveMode::Browsing, 0).unwrap(), "Brazil");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameFilterStore {
    canonical: Vec<String>,
    query: String,
    filtered: Vec<String>,
}

impl NameFilterStore {
    /// Build a store from an in-memory list of names.
    ///
    /// The names are stable-sorted ascending by plain `str` ordering;
    /// duplicates are kept. An empty list is valid and gives a store whose
    /// views are both empty.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut canonical: Vec<String> = names.into_iter().map(Into::into).collect();
        canonical.sort();
        let filtered = canonical.clone();
        NameFilterStore {
            canonical,
            query: String::new(),
            filtered,
        }
    }

    /// Read `source` once and build a store from it.
    ///
    /// On failure nothing is kept; hosts report the error once and fall
    /// back to [`NameFilterStore::default`], which is empty in both modes.
    pub fn load<S: NameSource>(source: S) -> Result<Self> {
        let label = source.describe();
        match source.read_names() {
            Ok(names) => {
                let store = Self::from_names(names);
                tracing::debug!(source = %label, names = store.canonical.len(), "name list loaded");
                Ok(store)
            }
            Err(e) => {
                tracing::warn!(source = %label, error = %e, "name list could not be loaded");
                Err(e)
            }
        }
    }

    /// Replace the query and recompute the filtered view.
    ///
    /// A name matches when its lowercase form contains the lowercase form
    /// of `query`. The empty query matches every name.
    pub fn set_query(&mut self, query: &str) -> &[String] {
        let needle = fold_case(query);
        self.filtered = self
            .canonical
            .iter()
            .filter(|name| contains_folded(name, &needle))
            .cloned()
            .collect();
        self.query.clear();
        self.query.push_str(query);
        tracing::debug!(query, matches = self.filtered.len(), "filtered view recomputed");
        &self.filtered
    }

    /// The query last passed to [`set_query`](Self::set_query).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All names, sorted.
    pub fn canonical(&self) -> &[String] {
        &self.canonical
    }

    /// `true` when nothing was loaded (a failed or empty load).
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// The view the host should render for `mode`.
    pub fn current_view(&self, mode: ActiveMode) -> &[String] {
        match mode {
            ActiveMode::Searching => &self.filtered,
            ActiveMode::Browsing => &self.canonical,
        }
    }

    /// Number of rows in [`current_view`](Self::current_view) for `mode`.
    pub fn count(&self, mode: ActiveMode) -> usize {
        self.current_view(mode).len()
    }

    /// The name shown at row `index` for `mode`.
    ///
    /// Hosts must check [`count`](Self::count) first; an index past the end
    /// is reported as [`SearchError::IndexOutOfBounds`].
    pub fn name_at(&self, mode: ActiveMode, index: usize) -> Result<&str> {
        let view = self.current_view(mode);
        view.get(index)
            .map(String::as_str)
            .ok_or(SearchError::IndexOutOfBounds {
                index,
                len: view.len(),
            })
    }

    pub fn stats(&self) -> ListStats {
        ListStats {
            total: self.canonical.len(),
            matching: self.filtered.len(),
        }
    }
}
