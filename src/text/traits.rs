// Word normalizer trait — the seam between raw tokens and counted words.
//
// The frequency counter only needs "token in, canonical word or nothing out".
// The default implementation folds case and diacritics; tests and callers
// with other needs can plug in their own.

/// Turns a raw whitespace-delimited token into a canonical, comparable word.
pub trait WordNormalizer {
    /// Returns the canonical form of `token`, or `None` if the token carries
    /// no word at all (punctuation, digits, empty input).
    fn normalize(&self, token: &str) -> Option<String>;
}

impl<F> WordNormalizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn normalize(&self, token: &str) -> Option<String> {
        self(token)
    }
}
