//! Basic usage example for country-search-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country list
//! - Search it the way a search bar would, one keystroke at a time
//! - Hand the selected row to a detail step and build its map request

use country_search_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== country-search Basic Usage Example ===\n");

    // Load the list
    let mut store = NameFilterStore::load(BundledSource)?;
    println!("Loaded {} names\n", store.count(ActiveMode::Browsing));

    // Example 1: Browse
    println!("--- Example 1: First names while browsing ---");
    for (i, name) in store.current_view(ActiveMode::Browsing).iter().take(5).enumerate() {
        println!("{i}. {name}");
    }
    println!();

    // Example 2: Search keystroke by keystroke
    println!("--- Example 2: Typing \"guin\" ---");
    for q in ["g", "gu", "gui", "guin"] {
        let view = store.set_query(q);
        println!("{q:<5} -> {} matches", view.len());
    }
    println!("{:?}\n", store.current_view(ActiveMode::Searching));

    // Example 3: Select and hand off
    println!("--- Example 3: Select a row ---");
    let handoff = SelectionHandoff::new();
    let mode = ActiveMode::Searching;
    let last = store.count(mode) - 1;
    handoff.set(store.name_at(mode, last)?);

    let request = MapRequest::from_handoff(&handoff);
    println!("Title: {}", request.title);
    println!("Map:   {}", request.url);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
