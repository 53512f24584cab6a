//! Field weighting and result ordering.

use crate::common::{locations, make_record, make_section, fixture_index_with};
use docsift::{
    build_index, build_index_with, search, FieldWeights, MatchMode, PrefixScope, SearchConfig,
    SearchOptions,
};

#[test]
fn test_title_outranks_body() {
    let index = build_index(vec![
        make_record("body/", "Overview", "the kernel is described here kernel kernel"),
        make_section("api/#kernel", "API", "kernel", ""),
    ])
    .unwrap();

    let results = search(&index, "kernel", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["api/#kernel", "body/"]);
    assert_eq!(results[0].score, 5.0);
    assert_eq!(results[1].score, 3.0);
}

#[test]
fn test_page_outranks_body() {
    let index = build_index(vec![
        make_section("a/#x", "Sampling", "Overview", ""),
        make_record("b/", "Other", "sampling sampling"),
    ])
    .unwrap();

    let results = search(&index, "sampling", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["a/#x", "b/"]);
    assert_eq!(results[0].score, 3.0);
    assert_eq!(results[1].score, 2.0);
}

#[test]
fn test_ties_break_by_location() {
    let index = build_index(vec![
        make_record("zeta/", "Z", "measure"),
        make_record("alpha/", "A", "measure"),
        make_record("mid/", "M", "measure"),
    ])
    .unwrap();

    let results = search(&index, "measure", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["alpha/", "mid/", "zeta/"]);
}

#[test]
fn test_scores_non_increasing() {
    let results = search(&crate::common::FIXTURE_INDEX, "measure", SearchOptions::default()).unwrap();
    assert!(results.len() > 5);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].location < pair[1].location);
        }
    }
}

#[test]
fn test_scores_add_across_terms() {
    // Exact terms only, so each query's matches are independent
    let config = SearchConfig {
        prefix_scope: PrefixScope::Off,
        ..SearchConfig::default()
    };
    let index = fixture_index_with(config);

    let both = search(&index, "lebesgue measure", SearchOptions::default()).unwrap();
    let lebesgue = search(&index, "lebesgue", SearchOptions::default()).unwrap();
    let measure = search(&index, "measure", SearchOptions::default()).unwrap();
    assert!(!both.is_empty());

    for result in &both {
        let a = lebesgue.iter().find(|r| r.location == result.location).unwrap();
        let b = measure.iter().find(|r| r.location == result.location).unwrap();
        assert_eq!(result.score, a.score + b.score);
    }
    for result in &lebesgue {
        if measure.iter().any(|r| r.location == result.location) {
            assert!(both.iter().any(|r| r.location == result.location));
        }
    }
}

#[test]
fn test_any_mode_unions() {
    let config = SearchConfig {
        match_mode: MatchMode::Any,
        ..SearchConfig::default()
    };
    let index = build_index_with(
        vec![
            make_record("a/", "A", "beta"),
            make_record("b/", "B", "gamma"),
            make_record("c/", "C", "beta gamma"),
        ],
        config,
    )
    .unwrap();

    let results = search(&index, "beta gamma", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["c/", "a/", "b/"]);
}

#[test]
fn test_custom_weights() {
    let config = SearchConfig {
        weights: FieldWeights {
            title: 1.0,
            page: 1.0,
            text: 10.0,
        },
        ..SearchConfig::default()
    };
    let index = build_index_with(
        vec![
            make_section("api/#kernel", "API", "kernel", ""),
            make_record("body/", "Overview", "kernel"),
        ],
        config,
    )
    .unwrap();

    let results = search(&index, "kernel", SearchOptions::default()).unwrap();
    assert_eq!(locations(&results), vec!["body/", "api/#kernel"]);
}
