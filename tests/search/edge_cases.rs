//! Degenerate queries and paging boundaries.

use crate::common::{locations, make_record, FIXTURE_INDEX};
use docsift::{build_index, search, CancelToken, SearchError, SearchOptions};
use std::time::Duration;

#[test]
fn test_empty_and_blank_queries() {
    for query in ["", " ", "\t\n", "\u{00A0}\u{2003}"] {
        let results = search(&FIXTURE_INDEX, query, SearchOptions::default()).unwrap();
        assert!(results.is_empty(), "query {:?} returned results", query);
    }
}

#[test]
fn test_punctuation_only_query() {
    for query in ["!!!", "...", "(,)", "«»", "— –"] {
        let results = search(&FIXTURE_INDEX, query, SearchOptions::default()).unwrap();
        assert!(results.is_empty(), "query {:?} returned results", query);
    }
}

#[test]
fn test_punctuation_around_terms_is_ignored() {
    let plain = search(&FIXTURE_INDEX, "lebesgue", SearchOptions::default()).unwrap();
    let wrapped = search(&FIXTURE_INDEX, "(Lebesgue)!", SearchOptions::default()).unwrap();
    assert_eq!(locations(&plain), locations(&wrapped));
}

#[test]
fn test_paging_walks_full_list() {
    let all = search(&FIXTURE_INDEX, "measure", SearchOptions::default()).unwrap();

    let mut paged = Vec::new();
    let mut offset = 0;
    while offset < all.len() {
        let page = search(&FIXTURE_INDEX, "measure", SearchOptions::with_limit(4).offset(offset)).unwrap();
        assert!(page.len() <= 4);
        paged.extend(page);
        offset += 4;
    }
    assert_eq!(paged, all);
}

#[test]
fn test_offset_at_end_is_empty() {
    let all = search(&FIXTURE_INDEX, "lebesgue", SearchOptions::default()).unwrap();
    let tail = search(&FIXTURE_INDEX, "lebesgue", SearchOptions::default().offset(all.len())).unwrap();
    assert!(tail.is_empty());
}

#[test]
fn test_offset_past_end_is_rejected() {
    let err = search(&FIXTURE_INDEX, "lebesgue", SearchOptions::default().offset(100)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidQueryOptions { .. }));
}

#[test]
fn test_negative_options_rejected() {
    assert!(SearchOptions::from_signed(Some(-1), 0).is_err());
    assert!(SearchOptions::from_signed(None, -5).is_err());
    let opts = SearchOptions::from_signed(Some(3), 1).unwrap();
    assert_eq!(opts, SearchOptions::with_limit(3).offset(1));
}

#[test]
fn test_limit_zero() {
    let results = search(&FIXTURE_INDEX, "measure", SearchOptions::with_limit(0)).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_very_long_query() {
    let query = "measure ".repeat(500);
    let results = search(&FIXTURE_INDEX, &query, SearchOptions::with_limit(5)).unwrap();
    assert_eq!(results.len(), 5);
}

#[test]
fn test_expired_deadline_cancels() {
    let cancel = CancelToken::with_timeout(Duration::ZERO);
    std::thread::sleep(Duration::from_millis(2));
    let err = FIXTURE_INDEX
        .search_with_cancel("measure", SearchOptions::default(), &cancel)
        .unwrap_err();
    assert_eq!(err, SearchError::Cancelled);
}

#[test]
fn test_uncancelled_token_matches_plain_search() {
    let cancel = CancelToken::new();
    let with = FIXTURE_INDEX
        .search_with_cancel("measure", SearchOptions::default(), &cancel)
        .unwrap();
    let without = search(&FIXTURE_INDEX, "measure", SearchOptions::default()).unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_case_folded_spellings_match() {
    let index = build_index(vec![
        make_record("street/", "Street", "Straße names"),
        make_record("sigma/", "Sums", "ΣΣ over the Ὀδυσσεύς index"),
    ])
    .unwrap();

    for (query, expected) in [
        ("STRASSE", "street/"),
        ("strasse", "street/"),
        ("straße", "street/"),
        ("σσ", "sigma/"),
        ("σς", "sigma/"),
        ("ΣΣ", "sigma/"),
        ("ὀδυσσεύσ", "sigma/"),
        ("ὈΔΥΣΣΕΎΣ", "sigma/"),
    ] {
        let results = search(&index, query, SearchOptions::default()).unwrap();
        assert_eq!(locations(&results), vec![expected], "query {:?}", query);
    }
}
