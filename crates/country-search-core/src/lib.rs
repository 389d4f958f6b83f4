// crates/country-search-core/src/lib.rs

//! Incremental search over a list of country names.
//!
//! - [`NameFilterStore`] owns the sorted canonical list and derives the
//!   view filtered by the current query (case-insensitive substring).
//! - [`SelectionHandoff`] carries the selected name from the list step to
//!   the detail step.
//! - [`map::MapRequest`] turns that name into a map place request.
//! - [`loader`] reads the names once at startup, from the bundled dataset
//!   or from a file.
//!
//! ```rust
//! use country_search_core::prelude::*;
//!
//! let mut store = NameFilterStore::from_names(["France", "Chad", "Canada", "Brazil"]);
//! let mode = ActiveMode::Searching;
//! store.set_query("ch");
//!
//! let handoff = SelectionHandoff::new();
//! handoff.set(store.name_at(mode, 0)?);
//!
//! let request = MapRequest::from_handoff(&handoff);
//! assert_eq!(request.title, "Chad");
//! # Ok::<(), country_search_core::SearchError>(())
//! ```

pub mod common;
pub mod error;
pub mod handoff;
pub mod loader; // The public loader
pub mod map;
pub mod mode;
pub mod prelude;
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::ListStats;
pub use crate::error::{CountryListError, Result, SearchError};
pub use crate::handoff::SelectionHandoff;
pub use crate::mode::ActiveMode;
pub use crate::store::NameFilterStore;
pub use crate::traits::NameSource;
