//! Terminal host for the list and detail steps.
//!
//! [`Session`] plays the part of the search bar, the list and the detail
//! screen: it owns the [`ActiveMode`], feeds every typed line to the store
//! as a new query and hands the selected row to the detail step through a
//! [`SelectionHandoff`].

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use country_search_core::map::MapRequest;
use country_search_core::{ActiveMode, NameFilterStore, NameSource, SelectionHandoff};

const HELP: &str = "\
Type to search; every line replaces the query.
  :open N   show the map request for row N
  :browse   leave search and show the full list
  :search   go back to the filtered list
  :help     show this text
  :quit     exit";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Query(String),
    Open(usize),
    Browse,
    Search,
    Help,
    Quit,
}

impl Input {
    /// Lines starting with `:` are commands, everything else is a query.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Input::Query(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("open" | "o"), Some(row), None) => row
                .parse()
                .map(Input::Open)
                .map_err(|_| format!("not a row number: {row}")),
            (Some("open" | "o"), _, _) => Err("usage: :open N".to_string()),
            (Some("browse" | "b"), None, _) => Ok(Input::Browse),
            (Some("search" | "s"), None, _) => Ok(Input::Search),
            (Some("help" | "h" | "?"), None, _) => Ok(Input::Help),
            (Some("quit" | "q"), None, _) => Ok(Input::Quit),
            _ => Err(format!("unknown command: {line}")),
        }
    }
}

pub struct Session {
    store: NameFilterStore,
    mode: ActiveMode,
    handoff: SelectionHandoff,
}

impl Session {
    pub fn new(store: NameFilterStore) -> Self {
        Session {
            store,
            mode: ActiveMode::Browsing,
            handoff: SelectionHandoff::new(),
        }
    }

    pub fn mode(&self) -> ActiveMode {
        self.mode
    }

    pub fn store(&self) -> &NameFilterStore {
        &self.store
    }

    /// Read lines from `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{HELP}")?;
        render_view(out, &self.store, self.mode)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            match Input::parse(&line) {
                Ok(Input::Quit) => break,
                Ok(cmd) => self.apply(cmd, out)?,
                Err(msg) => writeln!(out, "{msg}")?,
            }
        }
        Ok(())
    }

    pub fn apply<W: Write>(&mut self, input: Input, out: &mut W) -> Result<()> {
        match input {
            Input::Query(q) => {
                self.mode = ActiveMode::Searching;
                self.store.set_query(&q);
                render_view(out, &self.store, self.mode)?;
            }
            Input::Search => {
                self.mode = ActiveMode::Searching;
                let query = self.store.query().to_string();
                self.store.set_query(&query);
                render_view(out, &self.store, self.mode)?;
            }
            Input::Browse => {
                // The query survives so `:search` can bring the filter back.
                self.mode = ActiveMode::Browsing;
                render_view(out, &self.store, self.mode)?;
            }
            Input::Open(row) => match self.store.name_at(self.mode, row) {
                Ok(name) => {
                    self.handoff.set(name);
                    let request = MapRequest::from_handoff(&self.handoff);
                    render_detail(out, &request)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }
}

/// Read `source` once. A failure is reported on `notice` a single time and
/// leaves the host with an empty store; there is no retry.
pub fn load_or_notice<S, W>(source: &S, notice: &mut W) -> Result<NameFilterStore>
where
    S: NameSource + ?Sized,
    W: Write,
{
    match NameFilterStore::load(source) {
        Ok(store) => Ok(store),
        Err(e) => {
            writeln!(
                notice,
                "Unable to access the country name list ({}): {e}",
                source.describe()
            )?;
            Ok(NameFilterStore::default())
        }
    }
}

/// Print the rows of the view selected by `mode`, zero-based.
pub fn render_view<W: Write>(
    out: &mut W,
    store: &NameFilterStore,
    mode: ActiveMode,
) -> Result<()> {
    let view = store.current_view(mode);
    if view.is_empty() {
        if store.is_empty() {
            writeln!(out, "(no names loaded)")?;
        } else {
            writeln!(out, "(no matches for \"{}\")", store.query())?;
        }
        return Ok(());
    }
    for (i, name) in view.iter().enumerate() {
        writeln!(out, "{i:>4}  {name}")?;
    }
    Ok(())
}

/// Print the detail step for one hand-off.
pub fn render_detail<W: Write>(out: &mut W, request: &MapRequest) -> Result<()> {
    writeln!(out, "== {} ==", request.title)?;
    writeln!(out, "Map: {}", request.url)?;
    Ok(())
}
