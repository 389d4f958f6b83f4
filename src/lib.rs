//! country-search-rs
//!
//! Umbrella crate for the workspace: re-exports [`country_search_core`] so
//! the demos under `demos/` can be run from the repository root.

pub use country_search_core::*;
