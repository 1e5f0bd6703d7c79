use serde::{Deserialize, Serialize};

/// Default number of qualifying shared words needed for an edge.
pub const DEFAULT_SHARED_WORD_THRESHOLD: usize = 10;

/// Default minimum length (in characters) of a word that can qualify.
pub const DEFAULT_MIN_WORD_LEN: usize = 5;

/// Tunables for the edge decision.
///
/// Two documents are connected when they share at least
/// `shared_word_threshold` distinct words of at least `min_word_len`
/// characters. How often each word occurs does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityParams {
    pub shared_word_threshold: usize,
    pub min_word_len: usize,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        Self {
            shared_word_threshold: DEFAULT_SHARED_WORD_THRESHOLD,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}
