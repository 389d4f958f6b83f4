// crates/country-search-core/src/mode.rs
use serde::{Deserialize, Serialize};

/// Which of the two views a host is currently displaying.
///
/// The host owns this value (it flips on focus/defocus of its search input)
/// and passes it into every read on the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveMode {
    /// The full canonical list.
    #[default]
    Browsing,
    /// The view filtered by the current query.
    Searching,
}

impl ActiveMode {
    /// Maps a host's live "search UI is active" flag onto a mode.
    #[inline]
    pub fn from_search_active(active: bool) -> Self {
        if active {
            ActiveMode::Searching
        } else {
            ActiveMode::Browsing
        }
    }

    #[inline]
    pub fn is_searching(self) -> bool {
        self == ActiveMode::Searching
    }
}
