use country_search_core::prelude::*;

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == s))
}

fn samples() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec!["France"],
        vec!["Chad", "chad", "CHAD", "Chad"],
        vec!["United States", "United Kingdom", "United Arab Emirates", "Tanzania"],
        vec!["Åland", "Zambia", "Côte d'Ivoire", "Curaçao", "Bhutan", "Iceland"],
    ]
}

const QUERIES: &[&str] = &["", "a", "AN", "chad", "united ", "land", "ç", "zzz"];

#[test]
fn empty_query_returns_sorted_source() {
    for names in samples() {
        let mut expected: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        expected.sort();

        let mut store = NameFilterStore::from_names(names);
        assert_eq!(store.set_query(""), expected.as_slice());
    }
}

#[test]
fn every_result_contains_the_query() {
    for names in samples() {
        let mut store = NameFilterStore::from_names(names);
        for q in QUERIES {
            let folded = q.to_lowercase();
            for n in store.set_query(q) {
                assert!(n.to_lowercase().contains(&folded), "{n:?} does not contain {q:?}");
            }
        }
    }
}

#[test]
fn results_preserve_canonical_order() {
    for names in samples() {
        let mut store = NameFilterStore::from_names(names);
        let canonical = store.canonical().to_vec();
        for q in QUERIES {
            let view = store.set_query(q).to_vec();
            assert!(is_subsequence(&view, &canonical), "query {q:?}: {view:?}");
        }
    }
}

#[cfg(feature = "json")]
#[test]
fn count_always_matches_view_length() {
    let mut store = NameFilterStore::load(BundledSource).unwrap();
    for q in QUERIES {
        store.set_query(q);
        for mode in [ActiveMode::Browsing, ActiveMode::Searching] {
            assert_eq!(store.count(mode), store.current_view(mode).len());
            assert!(store.name_at(mode, store.count(mode)).is_err());
        }
    }
}

#[test]
fn search_select_and_hand_off() {
    let mut store = NameFilterStore::from_names(["Brazil", "Canada", "Chad", "France"]);

    assert_eq!(store.set_query("ch"), ["Chad"]);
    assert_eq!(store.set_query(""), ["Brazil", "Canada", "Chad", "France"]);

    store.set_query("ch");
    let mode = ActiveMode::Searching;
    let handoff = SelectionHandoff::new();
    handoff.set(store.name_at(mode, 0).unwrap());
    assert_eq!(handoff.take_or_default(), "Chad");
}

#[test]
fn degraded_load_has_no_rows() {
    let mut store = NameFilterStore::load(StaticSource::default()).unwrap();
    for q in QUERIES {
        store.set_query(q);
        assert_eq!(store.count(ActiveMode::Browsing), 0);
        assert_eq!(store.count(ActiveMode::Searching), 0);
    }
}

#[test]
fn failed_load_falls_back_to_empty_store() {
    let err = NameFilterStore::load(FileSource::new("/no/such/dir/countries.json")).unwrap_err();
    assert!(err.is_load_error());

    let store = NameFilterStore::default();
    assert_eq!(store.count(ActiveMode::Browsing), 0);
}

#[cfg(feature = "json")]
#[test]
fn bundled_dataset_search() {
    let mut store = NameFilterStore::load(BundledSource).unwrap();
    assert!(store.canonical().windows(2).all(|w| w[0] <= w[1]));

    let view = store.set_query("GUINEA");
    assert_eq!(
        view,
        ["Equatorial Guinea", "Guinea", "Guinea-Bissau", "Papua New Guinea"]
    );

    let request = MapRequest::for_place(store.name_at(ActiveMode::Searching, 3).unwrap());
    assert_eq!(request.url, "https://www.google.com/maps/place/Papua+New+Guinea");
}
