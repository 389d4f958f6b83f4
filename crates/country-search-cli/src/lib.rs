//! country-search-cli
//! ==================
//!
//! Command-line host for the `country-search-core` crate.
//!
//! The binary (`country-search`) stands in for the two screens of a
//! country browser: a searchable list of names and a detail step that
//! shows the map request for the selected name. The pieces below are the
//! library half of that binary so they can be tested without a terminal.
//!
//! Basic usage:
//!
//! ```text
//! country-search list
//! country-search search guinea
//! country-search open 2 --query guinea
//! country-search map New Zealand
//! country-search --input names.txt.gz interactive
//! ```
//!
//! For programmatic access use [`country-search-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod config;
pub mod logging;
pub mod session;
