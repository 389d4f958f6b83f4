use std::path::PathBuf;

use anyhow::Result;
use country_search_core::loader::FileSource;
use country_search_core::NameSource;

use crate::args::CliArgs;

/// Application configuration derived from CLI arguments, environment and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub log_filter: String,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: &CliArgs) -> Self {
        let log_filter = match cli.log_level.trim() {
            "" => "warn".to_string(),
            level => level.to_string(),
        };
        Self {
            input: cli.input.clone(),
            log_filter,
            json: cli.json,
        }
    }

    /// The loader to read names from: `--input` if given, the bundled list otherwise.
    pub fn source(&self) -> Result<Box<dyn NameSource>> {
        if let Some(path) = &self.input {
            return Ok(Box::new(FileSource::new(path)));
        }
        bundled_source()
    }
}

#[cfg(feature = "json")]
fn bundled_source() -> Result<Box<dyn NameSource>> {
    Ok(Box::new(country_search_core::loader::BundledSource))
}

#[cfg(not(feature = "json"))]
fn bundled_source() -> Result<Box<dyn NameSource>> {
    anyhow::bail!("no --input given and the bundled list needs the `json` feature")
}
