//! Error handling example for country-search-rs
//!
//! This example demonstrates the failure paths: an unreadable list, a row
//! past the end of the view, and map load events.

use country_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== country-search Error Handling Example ===\n");

    // Example 1: A list that cannot be read degrades to an empty store
    println!("--- Example 1: Loading a missing file ---");
    let store = match NameFilterStore::load(FileSource::new("does/not/exist.txt")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("✗ Unable to access the name list: {e}");
            NameFilterStore::default()
        }
    };
    println!("  Rows while browsing: {}", store.count(ActiveMode::Browsing));
    println!("  Rows while searching: {}", store.count(ActiveMode::Searching));
    println!();

    // Example 2: Rows past the end
    println!("--- Example 2: Asking for a row that is not there ---");
    let mut store = NameFilterStore::from_names(["Brazil", "Canada", "Chad", "France"]);
    store.set_query("ch");
    match store.name_at(ActiveMode::Searching, 3) {
        Ok(name) => println!("  Found: {name}"),
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 3: Nothing selected still yields a request
    println!("--- Example 3: Empty hand-off ---");
    let request = MapRequest::from_handoff(&SelectionHandoff::new());
    println!("  Title: {:?}, URL: {}", request.title, request.url);
    println!();

    // Example 4: Map load events
    println!("--- Example 4: Map load events ---");
    let mut tracker = MapLoadTracker::new();
    tracker.apply(MapLoadEvent::Started);
    if tracker.apply(MapLoadEvent::Failed(LoadFailure::Cancelled)).is_none() {
        println!("  Cancelled load ignored, busy = {}", tracker.is_busy());
    }
    if let Some(notice) = tracker.apply(MapLoadEvent::Failed(LoadFailure::Error(
        "The Internet connection appears to be offline.".into(),
    ))) {
        println!("{notice}");
    }

    Ok(())
}
