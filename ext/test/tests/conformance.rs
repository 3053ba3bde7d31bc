//! Conformance tests that run YAML fixtures against allocfilter
//!
//! Run with: cargo test -p allocfilter-test --test conformance
//!
//! Note: This test file requires the `fixtures` feature (on by default).

#![cfg(feature = "fixtures")]

use allocfilter_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixtures directory inside this crate
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run every fixture in one file
fn run_fixture_file(name: &str) {
    let path = fixtures_dir().join(name);
    assert!(path.exists(), "Fixture file does not exist: {}", path.display());

    println!("Running fixture file: {}", path.display());
    let yaml = fs::read_to_string(&path).expect("read yaml");

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} holds no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_has_key() {
    run_fixture_file("01_has_key.yaml");
}

#[test]
fn test_equals() {
    run_fixture_file("02_equals.yaml");
}

#[test]
fn test_starts_with() {
    run_fixture_file("03_starts_with.yaml");
}

#[test]
fn test_failures() {
    run_fixture_file("04_failures.yaml");
}

#[test]
fn every_fixture_file_is_covered() {
    let mut files: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    files.sort();
    assert_eq!(
        files,
        [
            "01_has_key.yaml",
            "02_equals.yaml",
            "03_starts_with.yaml",
            "04_failures.yaml"
        ]
    );
}
