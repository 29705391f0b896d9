//! Property tests for segmentation and selection

use proptest::prelude::*;
use youyaku_core::{extract_summary, segment, select, select_indices};

/// Strategy for words that cannot contain terminators or whitespace
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// Strategy for a prose document built from terminated sentences
fn prose(max_sentences: usize) -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec(word(), 1..=max_sentences).prop_map(|words| {
        let sentences: Vec<String> = words.into_iter().map(|w| format!("{w}.")).collect();
        let text = sentences.join(" ");
        (sentences, text)
    })
}

proptest! {
    #[test]
    fn segment_never_yields_empty_sentences(text in any::<String>()) {
        for sentence in segment(&text) {
            prop_assert!(!sentence.is_empty());
        }
    }

    #[test]
    fn segment_round_trips_simple_prose((sentences, text) in prose(12)) {
        // Order and content are preserved for well-formed input.
        prop_assert_eq!(segment(&text), sentences);
    }

    #[test]
    fn select_is_identity_for_short_lists((sentences, _) in prose(5)) {
        let max = sentences.len();
        prop_assert_eq!(select(&sentences, max), sentences.join(" "));
        prop_assert_eq!(select(&sentences, max + 3), sentences.join(" "));
    }

    #[test]
    fn select_picks_first_middle_last((sentences, _) in prose(20)) {
        prop_assume!(sentences.len() > 3);
        let n = sentences.len();
        let expected = [
            sentences[0].as_str(),
            sentences[n / 2].as_str(),
            sentences[n - 1].as_str(),
        ]
        .join(" ");
        prop_assert_eq!(select(&sentences, 3), expected);
    }

    #[test]
    fn select_two_picks_first_and_last((sentences, _) in prose(20)) {
        prop_assume!(sentences.len() > 2);
        let n = sentences.len();
        let expected = [sentences[0].as_str(), sentences[n - 1].as_str()].join(" ");
        prop_assert_eq!(select(&sentences, 2), expected);
    }

    #[test]
    fn select_one_picks_first((sentences, _) in prose(20)) {
        prop_assume!(sentences.len() > 1);
        prop_assert_eq!(select(&sentences, 1), sentences[0].clone());
    }

    #[test]
    fn selection_is_bounded_subsequence(n in 0usize..64, max in 0usize..8) {
        let indices = select_indices(n, max);
        prop_assert!(indices.len() <= max || n <= max);
        prop_assert!(indices.len() <= n);
        prop_assert!(indices.iter().all(|&i| i < n));
        // Strictly increasing: a subsequence, never a reordering.
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn extract_summary_matches_composition((_, text) in prose(20), max in 0usize..6) {
        prop_assert_eq!(extract_summary(&text, max), select(&segment(&text), max));
    }
}
