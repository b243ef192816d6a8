use geoselect_core::prelude::*;
use tempfile::tempdir;

fn round_trip(file_name: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file_name);
    let table = DefaultTable::shared().unwrap();

    table.save_as(&path).unwrap();
    let reloaded = DefaultTable::load_from_path(&path, None).unwrap();
    assert_eq!(&reloaded, table, "{file_name}");
}

#[test]
fn json_file() {
    round_trip("countries.json");
}

#[test]
fn binary_snapshot() {
    round_trip("countries.bin");
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_files() {
    round_trip("countries.json.gz");
    round_trip("countries.bin.gz");
}

#[test]
fn filter_keeps_requested_countries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.bin");
    DefaultTable::shared().unwrap().save_as(&path).unwrap();

    let table = DefaultTable::load_from_path(&path, Some(&["ca", "JP"][..])).unwrap();
    let names: Vec<_> = table.countries().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Canada", "Japan"]);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.csv");
    std::fs::write(&path, "name,abbreviation\n").unwrap();

    let err = DefaultTable::load_from_path(&path, None).unwrap_err();
    assert!(matches!(err, GeoSelectError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = DefaultTable::load_from_path(dir.path().join("nope.json"), None).unwrap_err();
    assert!(matches!(err, GeoSelectError::NotFound(_)));
}
