// crates/country-search-core/src/loader/file.rs
use super::common_io::{self, ListFormat};
use crate::error::{Result, SearchError};
use crate::traits::NameSource;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// A name list on disk.
///
/// The format follows the extension (see [`common_io::detect_encoding`]):
/// `.json` is a JSON array of strings, anything else is one name per line.
/// A trailing `.gz` adds gzip decompression.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameSource for FileSource {
    fn read_names(&self) -> Result<Vec<String>> {
        let encoding = common_io::detect_encoding(&self.path);
        let reader = common_io::open_stream(&self.path, encoding.gzip)?;

        let names = match encoding.format {
            ListFormat::Json => parse_json(reader, &self.path)?,
            ListFormat::Lines => parse_lines(reader)?,
        };

        if names.is_empty() {
            return Err(SearchError::EmptySource(self.path.display().to_string()));
        }
        Ok(names)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// One name per line; surrounding whitespace is trimmed and blank lines skipped.
pub fn parse_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

#[cfg(feature = "json")]
fn parse_json<R: Read>(reader: R, _path: &Path) -> Result<Vec<String>> {
    let names: Vec<String> = serde_json::from_reader(reader)?;
    Ok(names)
}

#[cfg(not(feature = "json"))]
fn parse_json<R: Read>(_reader: R, path: &Path) -> Result<Vec<String>> {
    Err(SearchError::Unsupported(format!(
        "{} is a JSON list; enable the `json` feature",
        path.display()
    )))
}
