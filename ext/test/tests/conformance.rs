//! Conformance tests that run YAML fixtures against rulefilter
//!
//! Run with: cargo test -p rulefilter-test --test conformance

use rulefilter_test::fixture::Fixture;
use rulefilter_test::init_test_tracing;
use std::fs;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn run_fixture_file(name: &str) {
    init_test_tracing();

    let path = fixtures_dir().join(name);
    let yaml = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {e}", path.display());
    });
    assert!(!fixtures.is_empty(), "{} has no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_namespaces() {
    run_fixture_file("01_namespaces.yaml");
}

#[test]
fn test_tags() {
    run_fixture_file("02_tags.yaml");
}

#[test]
fn test_composition() {
    run_fixture_file("03_composition.yaml");
}

#[test]
fn every_fixture_file_is_covered() {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("read fixtures dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".yaml"))
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["01_namespaces.yaml", "02_tags.yaml", "03_composition.yaml"]
    );
}
