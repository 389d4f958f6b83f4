//! country-search prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::ListStats;
pub use crate::error::{Result, SearchError};
pub use crate::handoff::SelectionHandoff;
#[cfg(feature = "json")]
pub use crate::loader::BundledSource;
pub use crate::loader::{FileSource, StaticSource};
pub use crate::map::{LoadFailure, MapLoadEvent, MapLoadTracker, MapRequest};
pub use crate::mode::ActiveMode;
pub use crate::store::NameFilterStore;
pub use crate::text::fold_case;
pub use crate::traits::NameSource;
