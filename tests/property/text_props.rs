//! Text cleaning, q-gram and edit distance properties.

use proptest::prelude::*;
use rowsearch::index::qgram::qgrams;
use rowsearch::{clean_text, osa, osa_distance};

/// Text mixing letters, digits, punctuation the cleaner cares about, and
/// assorted whitespace.
fn noisy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-zA-Zé0-9 \t\n,.'"`()\[\]{}\\/:;+_\-−…]{0,40}"#).unwrap()
}

fn short_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé]{0,7}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: cleaning is idempotent.
    #[test]
    fn prop_clean_is_idempotent(text in noisy_text_strategy()) {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once);
    }

    /// Property: cleaned text has single spaces and no outer whitespace.
    #[test]
    fn prop_clean_output_shape(text in noisy_text_strategy()) {
        let cleaned = clean_text(&text);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
        prop_assert!(!cleaned.contains(['\t', '\n']));
        prop_assert_eq!(cleaned.to_lowercase(), cleaned.clone());
    }

    /// Property: q-grams are windows of the word; short words are their own q-gram.
    #[test]
    fn prop_qgram_windows(word in prop::string::string_regex("[a-zé]{1,10}").unwrap()) {
        let grams = qgrams(&word);
        let len = word.chars().count();
        if len <= 2 {
            prop_assert_eq!(grams, vec![word.clone()]);
        } else {
            prop_assert_eq!(grams.len(), len - 1);
            for gram in &grams {
                prop_assert_eq!(gram.chars().count(), 2);
                prop_assert!(word.contains(gram.as_str()));
            }
        }
    }

    /// Property: OSA is symmetric and zero exactly on equal strings.
    #[test]
    fn prop_osa_metric_basics(a in short_word_strategy(), b in short_word_strategy()) {
        prop_assert_eq!(osa(&a, &a), 0);
        prop_assert_eq!(osa(&a, &b), osa(&b, &a));
        prop_assert_eq!(osa(&a, &b) == 0, a == b);
    }

    /// Property: without a cutoff, OSA agrees with the strsim reference.
    #[test]
    fn prop_osa_matches_reference(a in short_word_strategy(), b in short_word_strategy()) {
        prop_assert_eq!(osa_distance(&a, &b, 0, 1000), strsim::osa_distance(&a, &b));
    }

    /// Property: with a cutoff, distances below it are exact and the rest are
    /// reported as at-or-above it.
    #[test]
    fn prop_osa_cutoff_classifies(
        a in short_word_strategy(),
        b in short_word_strategy(),
        cutoff in 1usize..5,
    ) {
        let exact = strsim::osa_distance(&a, &b);
        let bounded = osa_distance(&a, &b, cutoff, 1000);
        if exact < cutoff {
            prop_assert_eq!(bounded, exact);
        } else {
            prop_assert!(bounded >= cutoff);
        }
        prop_assert_eq!(
            osa_distance(&b, &a, cutoff, 1000) >= cutoff,
            bounded >= cutoff
        );
    }
}
