// Shared-vocabulary similarity between two frequency profiles.
//
// A word "qualifies" for a pair of documents when it is long enough and
// appears in both profiles. Counts are ignored; only presence matters.

use std::collections::BTreeSet;

use super::params::SimilarityParams;
use crate::text::frequency::FrequencyMap;

/// The distinct qualifying words shared by `a` and `b`, sorted.
///
/// Built by walking `a`'s words and looking each one up in `b`. The
/// result is the same set whichever document comes first.
pub fn qualifying_shared_words<'a>(
    a: &'a FrequencyMap,
    b: &FrequencyMap,
    min_word_len: usize,
) -> BTreeSet<&'a str> {
    let mut shared = BTreeSet::new();
    for word in a.words() {
        if is_long_enough(word, min_word_len) && b.contains(word) {
            shared.insert(word);
        }
    }
    shared
}

/// How many distinct qualifying words `a` and `b` share.
pub fn shared_word_count(a: &FrequencyMap, b: &FrequencyMap, min_word_len: usize) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .words()
        .filter(|w| is_long_enough(w, min_word_len) && large.contains(w))
        .count()
}

/// Whether `a` and `b` share enough qualifying words to be connected.
///
/// Walks the smaller profile and stops as soon as the threshold is met.
pub fn is_similar(a: &FrequencyMap, b: &FrequencyMap, params: &SimilarityParams) -> bool {
    if params.shared_word_threshold == 0 {
        return true;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut shared = 0;
    for word in small.words() {
        if is_long_enough(word, params.min_word_len) && large.contains(word) {
            shared += 1;
            if shared >= params.shared_word_threshold {
                return true;
            }
        }
    }
    false
}

fn is_long_enough(word: &str, min_word_len: usize) -> bool {
    word.chars().count() >= min_word_len
}
