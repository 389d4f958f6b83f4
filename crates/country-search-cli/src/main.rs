//! country-search — Command-line interface for country-search-core
//!
//! Usage examples
//! --------------
//!
//! - List every name
//!   $ country-search list
//!
//! - Search (case-insensitive substring)
//!   $ country-search search ch
//!
//! - Select row 0 of a search and show its map request
//!   $ country-search open 0 --query ch
//!
//! - Type queries interactively
//!   $ country-search interactive
//!
//! Data source
//! -----------
//!
//! By default the bundled country list is used. `--input <path>` (or
//! `COUNTRY_SEARCH_INPUT`) points to a `.json` array or a one-name-per-line
//! file, optionally gzip-compressed. A list that cannot be read is reported
//! once and the program carries on with an empty list.
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use country_search_cli::args::{CliArgs, Commands};
use country_search_cli::config::Config;
use country_search_cli::logging;
use country_search_cli::session::{load_or_notice, render_detail, render_view, Session};
use country_search_core::map::MapRequest;
use country_search_core::{ActiveMode, NameFilterStore, SelectionHandoff};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = Config::from_cli(&args);
    logging::init(&config.log_filter)?;
    tracing::debug!(?config, command = ?args.command, "configuration resolved");

    // Load once; a failure is shown once and leaves the list empty.
    let source = config.source()?;
    let mut store = load_or_notice(source.as_ref(), &mut io::stderr().lock())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::List => print_view(&mut out, &store, ActiveMode::Browsing, config.json)?,

        Commands::Search { query } => {
            store.set_query(&query);
            print_view(&mut out, &store, ActiveMode::Searching, config.json)?;
        }

        Commands::Open { row, query } => {
            let mode = ActiveMode::from_search_active(query.is_some());
            if let Some(q) = &query {
                store.set_query(q);
            }
            let name = store
                .name_at(mode, row)
                .with_context(|| format!("cannot open row {row}"))?;

            let handoff = SelectionHandoff::new();
            handoff.set(name);
            print_detail(&mut out, &MapRequest::from_handoff(&handoff), config.json)?;
        }

        Commands::Map { name } => {
            let request = MapRequest::for_place(&name.join(" "));
            print_detail(&mut out, &request, config.json)?;
        }

        Commands::Stats { query } => {
            store.set_query(query.as_deref().unwrap_or_default());
            let stats = store.stats();
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "List statistics:")?;
                writeln!(out, "  Names: {}", stats.total)?;
                writeln!(out, "  Matching \"{}\": {}", store.query(), stats.matching)?;
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(store).run(stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

fn print_view<W: Write>(
    out: &mut W,
    store: &NameFilterStore,
    mode: ActiveMode,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(store.current_view(mode))?)?;
        return Ok(());
    }
    render_view(out, store, mode)
}

fn print_detail<W: Write>(out: &mut W, request: &MapRequest, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(request)?)?;
        return Ok(());
    }
    render_detail(out, request)
}
