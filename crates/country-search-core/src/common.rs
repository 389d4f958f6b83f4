use serde::{Deserialize, Serialize};

/// Simple aggregate counts for a [`NameFilterStore`](crate::store::NameFilterStore).
///
/// Returned by [`NameFilterStore::stats`](crate::store::NameFilterStore::stats);
/// `matching` reflects the query that was last passed to `set_query`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStats {
    pub total: usize,
    pub matching: usize,
}
