//! End-to-end correctness on the snapshot fixture.

use crate::common::{locations, sample_index, FIXTURE_INDEX};
use docsift::{search, Category, SearchOptions};

#[test]
fn test_normal_finds_declaration_page() {
    let results = search(&FIXTURE_INDEX, "Normal", SearchOptions::default()).unwrap();
    let locs = locations(&results);
    assert!(locs.contains(&"adding/".to_string()), "adding/ missing from {:?}", locs);

    let adding = results.iter().find(|r| r.location == "adding/").unwrap();
    assert_eq!(adding.page, "Adding a New Measure");
    assert_eq!(adding.category, Category::Page);
    assert!(!adding.snippet.highlights.is_empty());
    for hit in adding.snippet.highlighted() {
        assert!(
            hit.to_lowercase().starts_with("normal"),
            "unexpected highlight {:?}",
            hit
        );
    }
}

#[test]
fn test_sample_normal_snippet() {
    let results = search(&sample_index(), "norm", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["adding/"]);
    let rendered = results[0].snippet.render("<b>", "</b>");
    assert!(
        rendered.contains("For example, <b>Normal</b> is declared as"),
        "{}",
        rendered
    );
}

#[test]
fn test_symbol_query() {
    let results = search(&FIXTURE_INDEX, "≪", SearchOptions::default()).unwrap();
    let mut locs = locations(&results);
    locs.sort();
    assert_eq!(
        locs,
        vec![
            "#MeasureTheory.@half-Tuple{Any}",
            "#MeasureTheory.Density",
            "adding/",
        ]
    );
    for result in &results {
        assert!(result.snippet.highlighted().contains(&"≪"));
    }
}

#[test]
fn test_math_alphanumeric_query() {
    let results = search(&FIXTURE_INDEX, "𝒹", SearchOptions::default()).unwrap();
    assert_eq!(
        results[0].location,
        "#MeasureTheory.𝒹-Tuple{AbstractMeasure, AbstractMeasure}"
    );
    assert_eq!(results[0].category, Category::Section);
    assert_eq!(results[0].breadcrumb, "Home » MeasureTheory.𝒹");
}

#[test]
fn test_section_by_heading() {
    let results = search(&FIXTURE_INDEX, "random sampling", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["adding/#Random-Sampling"]);
    assert_eq!(results[0].score, 10.0);
    assert_eq!(results[0].breadcrumb, "Adding a New Measure » Random Sampling");
    // Heading-only section has no body to excerpt
    assert!(results[0].snippet.text.is_empty());
}

#[test]
fn test_docstring_entries_are_sections() {
    let results = search(&FIXTURE_INDEX, "kernel", SearchOptions::default()).unwrap();
    assert_eq!(results[0].location, "#MeasureTheory.kernel");
    assert_eq!(results[0].category, Category::Section);
}

#[test]
fn test_root_location_is_searchable() {
    let results = search(&FIXTURE_INDEX, "home", SearchOptions::default()).unwrap();
    assert!(locations(&results).contains(&"./".to_string()));
}

#[test]
fn test_case_insensitive() {
    let lower = search(&FIXTURE_INDEX, "lebesgue", SearchOptions::default()).unwrap();
    let upper = search(&FIXTURE_INDEX, "LEBESGUE", SearchOptions::default()).unwrap();
    assert_eq!(lower, upper);
    assert_eq!(locations(&lower), vec!["adding/", "#MeasureTheory.@half-Tuple{Any}"]);
}

#[test]
fn test_and_semantics() {
    // "beta" appears only on adding/, so adding it to any query narrows to it
    let results = search(&FIXTURE_INDEX, "beta lebesgue", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["adding/"]);

    let results = search(&FIXTURE_INDEX, "beta kernel", SearchOptions::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_no_match() {
    let results = search(&FIXTURE_INDEX, "zebra", SearchOptions::default()).unwrap();
    assert!(results.is_empty());
}
