// crates/country-search-core/src/loader/mod.rs

//! # Name Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (JSON array vs one name per line). Every source here
//! implements [`NameSource`] and is read once, at startup.

use crate::error::Result;
use crate::traits::NameSource;
use std::path::PathBuf;

pub mod common_io;
mod file;

#[cfg(feature = "json")]
mod bundled;

#[cfg(feature = "json")]
pub use bundled::BundledSource;
pub use file::{parse_lines, FileSource};

/// Directory holding the bundled dataset inside the crate.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "countries.json"
}

/// Names that are already in memory. Unlike [`FileSource`], an empty list
/// is accepted; it stands for a degraded load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    names: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticSource {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for StaticSource {
    fn read_names(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory names", self.names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_file_lives_in_data_dir() {
        let path = default_data_dir().join(default_dataset_filename());
        assert!(path.is_file(), "missing {}", path.display());
    }

    #[test]
    fn static_source_allows_empty() {
        let names = StaticSource::default().read_names().unwrap();
        assert!(names.is_empty());
    }
}
