//! Reading the generator snapshot fixture.

use crate::common::{fixture_records, SNAPSHOT_FIXTURE, SNAPSHOT_LOCATIONS, SNAPSHOT_PARAGRAPHS};
use docsift::build::{coalesce_paragraphs, RawRecord, ROOT_LOCATION};
use docsift::{parse_snapshot, Category};
use std::collections::HashSet;

#[test]
fn test_fixture_coalesces_to_one_record_per_location() {
    let records = fixture_records();
    assert_eq!(records.len(), SNAPSHOT_LOCATIONS);

    let unique: HashSet<&str> = records.iter().map(|r| r.location.as_str()).collect();
    assert_eq!(unique.len(), records.len(), "locations should be unique");
}

#[test]
fn test_fixture_raw_paragraph_count() {
    let source = std::fs::read_to_string(SNAPSHOT_FIXTURE).unwrap();
    let start = source.find('{').unwrap();
    let body = source[start..].trim_end().trim_end_matches(';');

    #[derive(serde::Deserialize)]
    struct Payload {
        docs: Vec<RawRecord>,
    }
    let payload: Payload = serde_json::from_str(body).unwrap();
    assert_eq!(payload.docs.len(), SNAPSHOT_PARAGRAPHS);
}

#[test]
fn test_fixture_order_follows_first_paragraph() {
    let records = fixture_records();
    assert_eq!(records[0].location, "intro/");
    assert_eq!(records[1].location, "adding/#Adding-a-New-Measure");
    assert_eq!(records[3].location, "adding/");
}

#[test]
fn test_fixture_root_location() {
    let records = fixture_records();
    let root = records.iter().find(|r| r.location == ROOT_LOCATION).unwrap();
    assert_eq!(root.page, "Home");
    assert_eq!(root.category, Category::Page);
    assert!(records.iter().all(|r| !r.location.is_empty()));
}

#[test]
fn test_fixture_docstrings_become_sections() {
    let records = fixture_records();
    let docstrings: Vec<_> = records
        .iter()
        .filter(|r| r.location.starts_with("#MeasureTheory."))
        .collect();
    assert_eq!(docstrings.len(), 16);
    assert!(docstrings.iter().all(|r| r.category == Category::Section));
    assert!(docstrings.iter().all(|r| r.fragment().is_some()));
}

#[test]
fn test_fixture_paragraphs_joined() {
    let records = fixture_records();
    let adding = records.iter().find(|r| r.location == "adding/").unwrap();
    assert!(adding.text.starts_with("This is by far the most common kind of measure"));
    assert!(adding.text.contains("\n\nTo start, declare a @parameterized."));
    assert!(adding.text.contains("\n\n@parameterized Normal(μ,σ) ≪ (1/sqrt2π) * Lebesgue(ℝ)"));
}

#[test]
fn test_coalesce_is_idempotent() {
    let once = fixture_records();
    let twice = coalesce_paragraphs(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_unknown_wrapper_is_malformed() {
    assert!(parse_snapshot("var documenterSearchIndex = {\"pages\": []}").is_err());
}
