//! Inverted index construction over real and synthetic corpora.

use crate::common::{assert_index_well_formed, fixture_records, make_record, FIXTURE_INDEX};
use docsift::{build_index, build_inverted_index, DocumentStore, FieldTag};

#[test]
fn test_fixture_index_well_formed() {
    assert_index_well_formed(&FIXTURE_INDEX);
    assert_eq!(FIXTURE_INDEX.inverted().total_docs(), FIXTURE_INDEX.store().len());
    assert!(FIXTURE_INDEX.inverted().term_count() > 100);
}

#[test]
fn test_fixture_symbols_indexed() {
    let index = FIXTURE_INDEX.inverted();
    for symbol in ["≪", "ℝ", "𝒹", "∫"] {
        assert!(index.contains_term(symbol), "missing symbol term {:?}", symbol);
    }
    assert!(index.contains_term("μ"));
}

#[test]
fn test_build_is_idempotent() {
    let store = DocumentStore::load(fixture_records()).unwrap();
    let a = build_inverted_index(&store);
    let b = build_inverted_index(&store);
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_build_matches_sequential() {
    let store = DocumentStore::load(fixture_records()).unwrap();
    assert_eq!(
        docsift::build_inverted_index_parallel(&store),
        build_inverted_index(&store)
    );
}

#[test]
fn test_positions_are_token_offsets() {
    let index = build_index(vec![make_record(
        "a/",
        "Title",
        "Normal(μ,σ) ≪ Lebesgue(ℝ)",
    )])
    .unwrap();

    let normal = index.inverted().postings("normal").unwrap();
    assert_eq!(normal.len(), 1);
    assert_eq!(normal[0].field, FieldTag::Text);
    assert_eq!(normal[0].positions, vec![0]);

    let ll = index.inverted().postings("≪").unwrap();
    assert_eq!(ll[0].positions, vec![3]);

    let reals = index.inverted().postings("ℝ").unwrap();
    assert_eq!(reals[0].positions, vec![5]);
}

#[test]
fn test_postings_follow_record_order() {
    let index = build_index(vec![
        make_record("z/", "Measure", "measure"),
        make_record("a/", "Other", "measure"),
    ])
    .unwrap();

    let postings = index.inverted().postings("measure").unwrap();
    let keys: Vec<(&str, FieldTag)> = postings
        .iter()
        .map(|p| (p.location.as_str(), p.field))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("z/", FieldTag::Title),
            ("z/", FieldTag::Page),
            ("z/", FieldTag::Text),
            ("a/", FieldTag::Text),
        ]
    );
}

#[test]
fn test_empty_corpus_builds() {
    let index = build_index(Vec::new()).unwrap();
    assert_eq!(index.inverted().term_count(), 0);
}
