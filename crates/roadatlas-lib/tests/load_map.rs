use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use roadatlas_lib::{load_road_map, Error};

mod common;

fn write_tables(gps: &str, segments: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempdir().expect("create temp dir");
    let gps_path = dir.path().join("city-gps.txt");
    let segments_path = dir.path().join("road-segments.txt");
    fs::write(&gps_path, gps).expect("write gps table");
    fs::write(&segments_path, segments).expect("write segment table");
    (dir, gps_path, segments_path)
}

#[test]
fn fixture_tables_load() {
    let map = common::fixture_map();
    assert_eq!(map.locations.len(), 8, "7 gps rows plus segment-only Lincoln");
    assert_eq!(map.segments.len(), 8);
}

#[test]
fn segment_only_location_lacks_coordinates() {
    let map = common::fixture_map();
    let lincoln = map.location_id("Lincoln").expect("interned from segments");
    assert!(map.coordinates(lincoln).is_none());

    let springfield = map.location_id("Springfield").unwrap();
    assert!(map.coordinates(springfield).is_some());
}

#[test]
fn blank_lines_are_skipped() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\n\nB 3.0 4.0\n", "\nA B 10 50 US-1\n\n");
    let map = load_road_map(&gps, &segments).expect("blank lines tolerated");
    assert_eq!(map.locations.len(), 2);
    assert_eq!(map.segments.len(), 1);
}

#[test]
fn duplicate_location_rows_overwrite() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\nA 5.0 6.0\n", "A B 10 50 US-1\n");
    let map = load_road_map(&gps, &segments).expect("duplicates tolerated");
    let a = map.location_id("A").unwrap();
    assert_eq!(map.coordinates(a).unwrap().latitude, 5.0);
    assert_eq!(map.locations.len(), 2);
}

#[test]
fn non_numeric_latitude_is_rejected() {
    let (_dir, gps, segments) = write_tables("A north 2.0\n", "A B 10 50 US-1\n");
    let err = load_road_map(&gps, &segments).expect_err("bad latitude");
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("latitude"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_segment_field_count_is_rejected() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\n", "A B 10 50\n");
    let err = load_road_map(&gps, &segments).expect_err("missing road class");
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("expected 5 fields"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_speed_limit_is_rejected() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\n", "A B 10 50 US-1\nB C 5 0 US-2\n");
    let err = load_road_map(&gps, &segments).expect_err("zero speed");
    match err {
        Error::MalformedRecord { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("speed limit"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_length_is_rejected() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\n", "A B -10 50 US-1\n");
    let err = load_road_map(&gps, &segments).expect_err("negative length");
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn fractional_length_is_rejected() {
    let (_dir, gps, segments) = write_tables("A 1.0 2.0\n", "A B 10.5 50 US-1\n");
    let err = load_road_map(&gps, &segments).expect_err("integer field");
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = load_road_map(&dir.path().join("absent.txt"), &dir.path().join("also-absent.txt"))
        .expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}
