// Token normalization: letters only, lowercase, no diacritics.
//
// "Café", "CAFÉ" and "café!" all become "cafe". Anything that has no letters
// left after filtering (numbers, punctuation, empty strings) is discarded.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::traits::WordNormalizer;

/// The default normalizer: drops non-letters, lowercases, strips diacritics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiacriticFolding;

impl WordNormalizer for DiacriticFolding {
    fn normalize(&self, token: &str) -> Option<String> {
        normalize(token)
    }
}

/// Normalize a single raw token into its canonical word.
///
/// Steps, in order:
/// 1. keep only letters (general category L: Lu, Ll, Lt, Lm, Lo)
/// 2. Unicode lowercase
/// 3. canonical decomposition (NFD), then drop every combining mark
///
/// Returns `None` when nothing is left. Never fails.
pub fn normalize(token: &str) -> Option<String> {
    let letters: String = token.chars().filter(|&c| is_letter(c)).collect();
    if letters.is_empty() {
        return None;
    }

    let word: String = letters
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Whether `c` is a Unicode letter. Letter numbers (Ⅻ) and symbols that
/// carry the Alphabetic property (ⓐ) are not letters.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
