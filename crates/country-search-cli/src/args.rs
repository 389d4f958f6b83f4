use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for country-search
#[derive(Debug, Parser)]
#[command(
    name = "country-search",
    version,
    about = "Search a list of country names and build map links for them"
)]
pub struct CliArgs {
    /// Path to a name list (.json array or one name per line, optionally .gz).
    /// Defaults to the bundled country list.
    #[arg(short = 'i', long = "input", global = true, env = "COUNTRY_SEARCH_INPUT")]
    pub input: Option<PathBuf>,

    /// Log filter, e.g. `warn`, `debug` or `country_search_core=trace`
    #[arg(
        long = "log-level",
        global = true,
        env = "COUNTRY_SEARCH_LOG",
        default_value = "warn"
    )]
    pub log_level: String,

    /// Print lists, stats and map requests as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every name, sorted
    List,

    /// List the names containing a substring (case-insensitive)
    Search {
        /// Substring to search for
        query: String,
    },

    /// Select a row and show its map request
    Open {
        /// Zero-based row in the current view
        row: usize,

        /// Search first and pick the row from the filtered view
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },

    /// Show the map request for a name
    Map {
        /// Country name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show how many names are loaded and how many match a query
    Stats {
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },

    /// Type queries line by line; `:help` lists the commands
    Interactive,
}
