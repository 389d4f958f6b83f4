// crates/country-search-core/src/traits.rs
use crate::error::Result;

/// Loader abstraction: where the candidate names come from.
///
/// A source is read exactly once, when a
/// [`NameFilterStore`](crate::store::NameFilterStore) is built from it. It
/// returns either the names (in any order, duplicates allowed) or a load
/// error; the store never reads it again.
///
/// # Examples
///
/// ```rust
/// use country_search_core::traits::NameSource;
/// use country_search_core::Result;
///
/// struct Fixed;
/// impl NameSource for Fixed {
///     fn read_names(&self) -> Result<Vec<String>> {
///         Ok(vec!["Peru".into(), "Chile".into()])
///     }
/// }
///
/// assert_eq!(Fixed.read_names().unwrap().len(), 2);
/// assert_eq!(Fixed.describe(), "names");
/// ```
pub trait NameSource {
    /// Read the full list of names.
    fn read_names(&self) -> Result<Vec<String>>;

    /// Human readable label used in log lines and load notices.
    fn describe(&self) -> String {
        "names".to_string()
    }
}

impl<S: NameSource + ?Sized> NameSource for &S {
    fn read_names(&self) -> Result<Vec<String>> {
        (**self).read_names()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl NameSource for Box<dyn NameSource> {
    fn read_names(&self) -> Result<Vec<String>> {
        (**self).read_names()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
