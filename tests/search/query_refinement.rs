//! Search-as-you-type: extending a query never widens its results.

use crate::common::{locations, FIXTURE_INDEX};
use docsift::{search, SearchOptions};
use std::collections::HashSet;

fn result_set(query: &str) -> HashSet<String> {
    locations(&search(&FIXTURE_INDEX, query, SearchOptions::default()).unwrap())
        .into_iter()
        .collect()
}

#[test]
fn test_typing_a_word_narrows() {
    let word = "parameterized";
    let mut previous = result_set(&word[..1]);
    for end in 2..=word.len() {
        let current = result_set(&word[..end]);
        assert!(
            current.is_subset(&previous),
            "{:?} widened results of {:?}",
            &word[..end],
            &word[..end - 1]
        );
        previous = current;
    }
    assert!(previous.contains("adding/"));
}

#[test]
fn test_adding_a_term_narrows() {
    let one = result_set("measure");
    let two = result_set("measure lebesgue");
    let three = result_set("measure lebesgue beta");
    assert!(two.is_subset(&one));
    assert!(three.is_subset(&two));
    assert_eq!(three, HashSet::from(["adding/".to_string()]));
}

#[test]
fn test_partial_last_word_matches() {
    let partial = result_set("random samp");
    assert!(partial.contains("adding/#Random-Sampling"));

    // Only the last word is a prefix
    let earlier = result_set("rand sampling");
    assert!(earlier.is_empty());
}
