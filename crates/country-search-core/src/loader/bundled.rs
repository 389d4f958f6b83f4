// crates/country-search-core/src/loader/bundled.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::Result;
use crate::traits::NameSource;
use once_cell::sync::OnceCell;

static BUNDLED_JSON: &str = include_str!("../../data/countries.json");

// Single in-process cache so we only parse once per process.
static BUNDLED_NAMES: OnceCell<Vec<String>> = OnceCell::new();

/// The country list compiled into the crate (`data/countries.json`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl NameSource for BundledSource {
    fn read_names(&self) -> Result<Vec<String>> {
        BUNDLED_NAMES
            .get_or_try_init(|| serde_json::from_str::<Vec<String>>(BUNDLED_JSON))
            .cloned()
            .map_err(Into::into)
    }

    fn describe(&self) -> String {
        format!("bundled {}", super::default_dataset_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_list_parses() {
        let names = BundledSource.read_names().unwrap();
        assert!(names.len() > 190, "expected a full country list, got {}", names.len());
        assert!(names.iter().any(|n| n == "Chad"));
        assert!(names.iter().all(|n| !n.trim().is_empty()));
    }

    #[test]
    fn bundled_list_is_cached() {
        let first = BundledSource.read_names().unwrap();
        let second = BundledSource.read_names().unwrap();
        assert_eq!(first, second);
    }
}
