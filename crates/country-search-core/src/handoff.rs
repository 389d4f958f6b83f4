// crates/country-search-core/src/handoff.rs
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Slot {
    name: Option<String>,
    pending: bool,
}

/// Single-slot transfer of the selected name from the list step to the
/// detail step.
///
/// Writes overwrite (last write wins, nothing is queued). Reads never fail:
/// a hand-off that was never written yields an empty name, so the detail
/// step degrades to an empty title and query instead of erroring.
///
/// # Example
///
/// ```rust
/// use country_search_core::SelectionHandoff;
///
/// let handoff = SelectionHandoff::new();
/// assert_eq!(handoff.take_or_default(), "");
///
/// handoff.set("Chad");
/// assert!(handoff.is_pending());
/// assert_eq!(handoff.take_or_default(), "Chad");
/// assert!(!handoff.is_pending());
/// ```
#[derive(Debug, Default)]
pub struct SelectionHandoff {
    slot: Mutex<Slot>,
}

impl SelectionHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `name`, replacing whatever was there.
    pub fn set(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(name = %name, "selection handed off");
        let mut slot = self.slot.lock();
        slot.name = Some(name);
        slot.pending = true;
    }

    /// The stored name, or `""` if nothing was ever set.
    ///
    /// Marks the current value as consumed; reading again returns the same
    /// value until the next [`set`](Self::set).
    pub fn take_or_default(&self) -> String {
        let mut slot = self.slot.lock();
        slot.pending = false;
        slot.name.clone().unwrap_or_default()
    }

    /// `true` between a [`set`](Self::set) and the next read.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn fresh_handoff_reads_empty() {
        let handoff = SelectionHandoff::new();
        assert!(!handoff.is_pending());
        assert_eq!(handoff.take_or_default(), "");
    }

    #[test]
    fn last_write_wins() {
        let handoff = SelectionHandoff::new();
        handoff.set("Canada");
        handoff.set("Chad");
        assert_eq!(handoff.take_or_default(), "Chad");
    }

    #[test]
    fn repeated_reads_return_the_same_value() {
        let handoff = SelectionHandoff::new();
        handoff.set("France");
        assert_eq!(handoff.take_or_default(), "France");
        assert_eq!(handoff.take_or_default(), "France");
        assert!(!handoff.is_pending());

        handoff.set("Brazil");
        assert!(handoff.is_pending());
    }

    #[test]
    fn writes_from_another_thread_are_visible() {
        let handoff = Arc::new(SelectionHandoff::new());
        let writer = Arc::clone(&handoff);
        thread::spawn(move || writer.set("Bhutan"))
            .join()
            .unwrap();
        assert_eq!(handoff.take_or_default(), "Bhutan");
    }
}
