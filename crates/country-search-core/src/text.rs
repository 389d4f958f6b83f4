// crates/country-search-core/src/text.rs

/// Convert a string into the folded form used for matching.
///
/// Only case is folded: `"FRANCE"`, `"France"` and `"france"` share a key,
/// while accents are kept (`"Curaçao"` does not match `"curacao"`).
///
/// # Examples
///
/// ```rust
/// use country_search_core::text::fold_case;
///
/// assert_eq!(fold_case("Côte d'Ivoire"), "côte d'ivoire");
/// assert_eq!(fold_case("CHAD"), "chad");
/// ```
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test against an already folded needle.
///
/// The store folds the query once per keystroke and calls this for every
/// canonical name, so the needle must come from [`fold_case`].
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    fold_case(haystack).contains(folded_needle)
}
