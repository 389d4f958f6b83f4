// crates/country-search-core/src/loader/common_io.rs
use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Payload layout of a name list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// A JSON array of strings.
    Json,
    /// One name per line.
    Lines,
}

/// How a path should be opened and parsed, decided from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    pub format: ListFormat,
    pub gzip: bool,
}

/// `countries.json.gz` → gzip + JSON, `names.txt` → plain lines, and so on.
pub fn detect_encoding(path: &Path) -> Encoding {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let (stem, gzip) = match name.strip_suffix(".gz") {
        Some(stem) => (stem.to_string(), true),
        None => (name, false),
    };
    let format = if stem.ends_with(".json") {
        ListFormat::Json
    } else {
        ListFormat::Lines
    };
    Encoding { format, gzip }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when asked to.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SearchError::NotFound(format!("Name list not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        drop(reader);
        Err(SearchError::Unsupported(format!(
            "{} is gzip-compressed; enable the `compact` feature",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_json_and_gzip() {
        let enc = detect_encoding(Path::new("data/countries.JSON.gz"));
        assert_eq!(enc.format, ListFormat::Json);
        assert!(enc.gzip);
    }

    #[test]
    fn everything_else_is_lines() {
        let enc = detect_encoding(Path::new("countries.txt"));
        assert_eq!(enc, Encoding { format: ListFormat::Lines, gzip: false });
        let enc = detect_encoding(Path::new("countries"));
        assert_eq!(enc.format, ListFormat::Lines);
    }
}
