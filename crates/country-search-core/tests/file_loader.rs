use country_search_core::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_one_name_per_line() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "countries.txt", b"France\nChad\n\nBrazil\nCanada\n");

    let store = NameFilterStore::load(FileSource::new(&path)).unwrap();
    assert_eq!(store.canonical(), ["Brazil", "Canada", "Chad", "France"]);
}

#[test]
fn blank_file_is_an_empty_source() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "countries.txt", b"\n   \n");

    match FileSource::new(&path).read_names() {
        Err(SearchError::EmptySource(p)) => assert!(p.ends_with("countries.txt")),
        other => panic!("expected EmptySource, got {other:?}"),
    }
}

#[cfg(feature = "json")]
#[test]
fn reads_json_array() {
    let dir = TempDir::new().unwrap();
    let json = r#"["Peru", "Chile", "Côte d'Ivoire"]"#;
    let path = write(&dir, "countries.json", json.as_bytes());

    let names = FileSource::new(&path).read_names().unwrap();
    assert_eq!(names, ["Peru", "Chile", "Côte d'Ivoire"]);
}

#[cfg(feature = "json")]
#[test]
fn malformed_json_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "countries.json", br#"{"not": "a list"}"#);

    let err = NameFilterStore::load(FileSource::new(&path)).unwrap_err();
    assert!(matches!(err, SearchError::Json(_)));
    assert!(err.is_load_error());
}

#[cfg(all(feature = "json", feature = "compact"))]
#[test]
fn reads_gzipped_json() {
    use flate2::{write::GzEncoder, Compression};

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(br#"["Tonga", "Samoa", "Fiji"]"#).unwrap();
    let bytes = encoder.finish().unwrap();

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "pacific.json.gz", &bytes);

    let mut store = NameFilterStore::load(FileSource::new(&path)).unwrap();
    assert_eq!(store.canonical(), ["Fiji", "Samoa", "Tonga"]);
    assert_eq!(store.set_query("O"), ["Samoa", "Tonga"]);
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzipped_lines() {
    use flate2::{write::GzEncoder, Compression};

    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    writeln!(encoder, "Nepal").unwrap();
    writeln!(encoder, "Bhutan").unwrap();
    let bytes = encoder.finish().unwrap();

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "himalaya.txt.gz", &bytes);

    let names = FileSource::new(&path).read_names().unwrap();
    assert_eq!(names, ["Nepal", "Bhutan"]);
}
