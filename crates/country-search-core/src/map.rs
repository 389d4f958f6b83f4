// crates/country-search-core/src/map.rs

//! # Map Request
//!
//! The detail step shows a map for the selected name. Fetching and drawing
//! the map belongs to an external web view; this module only builds the
//! request for it and interprets the load events it reports back.

use crate::handoff::SelectionHandoff;
use serde::Serialize;

/// Place-search endpoint the query is appended to.
pub const MAP_PLACE_BASE_URL: &str = "https://www.google.com/maps/place/";

/// Stands in for spaces in the query part of the URL.
pub const QUERY_SEPARATOR: char = '+';

/// Request handed to the map view for one selected name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapRequest {
    /// Title for the detail step (the name itself).
    pub title: String,
    /// The name with every space replaced by [`QUERY_SEPARATOR`].
    pub query: String,
    /// [`MAP_PLACE_BASE_URL`] followed by `query`.
    pub url: String,
}

impl MapRequest {
    /// Build the request for `name`.
    ///
    /// Never fails; an empty name gives an empty title and the bare endpoint.
    ///
    /// ```rust
    /// use country_search_core::map::MapRequest;
    ///
    /// let req = MapRequest::for_place("United States");
    /// assert_eq!(req.title, "United States");
    /// assert_eq!(req.url, "https://www.google.com/maps/place/United+States");
    /// ```
    pub fn for_place(name: &str) -> Self {
        let query = name.replace(' ', &QUERY_SEPARATOR.to_string());
        let url = format!("{MAP_PLACE_BASE_URL}{query}");
        MapRequest {
            title: name.to_string(),
            query,
            url,
        }
    }

    /// Read the hand-off once and build the request for whatever it holds.
    pub fn from_handoff(handoff: &SelectionHandoff) -> Self {
        Self::for_place(&handoff.take_or_default())
    }
}

/// Why a map load failed, as reported by the web view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The load was superseded (redirect or a newer request). Not an error.
    Cancelled,
    Error(String),
}

/// Lifecycle events the map view reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapLoadEvent {
    Started,
    Finished,
    Failed(LoadFailure),
}

/// What the detail step shows in place of the map after a failed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadNotice {
    pub message: String,
    pub causes: &'static [&'static str],
}

impl LoadNotice {
    pub const LIKELY_CAUSES: &'static [&'static str] = &[
        "No network connection",
        "Wrong URL entered",
        "Server computer is down",
    ];

    fn new(message: String) -> Self {
        LoadNotice {
            message,
            causes: Self::LIKELY_CAUSES,
        }
    }
}

impl std::fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "An error occurred: {}", self.message)?;
        write!(f, "Possible causes for this error:")?;
        for cause in self.causes {
            write!(f, "\n- {cause}")?;
        }
        Ok(())
    }
}

/// Busy indicator for the map view.
///
/// Busy from `Started` until `Finished` or a real failure. A cancelled load
/// changes nothing: the request that replaced it is still running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapLoadTracker {
    busy: bool,
}

impl MapLoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Apply one event; returns a notice when the failure should be shown.
    pub fn apply(&mut self, event: MapLoadEvent) -> Option<LoadNotice> {
        match event {
            MapLoadEvent::Started => {
                self.busy = true;
                None
            }
            MapLoadEvent::Finished => {
                self.busy = false;
                None
            }
            MapLoadEvent::Failed(LoadFailure::Cancelled) => {
                tracing::debug!("map load superseded");
                None
            }
            MapLoadEvent::Failed(LoadFailure::Error(message)) => {
                self.busy = false;
                tracing::warn!(%message, "map load failed");
                Some(LoadNotice::new(message))
            }
        }
    }
}
