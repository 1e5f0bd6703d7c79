// Unit tests for token normalization and word counting.
//
// Tests isolated pure functions: normalize output shape and idempotence,
// FrequencyMap bookkeeping, and count_lines invariants (total equals the
// number of surviving tokens, order independence).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::char::is_combining_mark;

use textgraph::text::frequency::{count_lines, count_reader, FrequencyCounter, FrequencyMap};
use textgraph::text::normalize::normalize;

const TOKENS: &[&str] = &[
    "Hello",
    "WORLD!",
    "café",
    "CAFÉ",
    "naïve",
    "Ångström",
    "über-cool",
    "São",
    "Łódź",
    "ÇA",
    "ﬁle",
    "Straße",
    "Ελληνικά",
    "Россия",
    "日本語",
    "x²",
    "don't",
    "123",
    "—",
    "",
    "  ",
    "e\u{301}",
    "Ⅻ",
    "Ⅷ",
    "ⓐⓑⓒ",
    "Ⓐbc",
    "ʰello",
];

/// Tokens with no Unicode letter at all: letter numbers, circled letters, digits.
const NON_LETTERS: &[&str] = &["Ⅻ", "Ⅷ", "ⓐⓑⓒ", "ⅰⅱⅲ", "①②", "123", "—", "", "  ", "!!!", "3.14"];

const LINES: &[&str] = &[
    "En un lugar de la Mancha, de cuyo nombre no quiero acordarme,",
    "no ha mucho tiempo que vivía un hidalgo de los de lanza en astillero,",
    "adarga antigua, rocín flaco y galgo corredor.",
    "",
    "   1605 -- 1615   ",
    "Una olla de algo más vaca que carnero, salpicón las más noches,",
    "duelos y quebrantos los sábados, lentejas los viernes,",
];

// ============================================================
// normalize — output shape
// ============================================================

#[test]
fn normalize_output_is_lowercase_letters_without_marks() {
    for token in TOKENS {
        if let Some(word) = normalize(token) {
            assert!(!word.is_empty());
            for c in word.chars() {
                let category = get_general_category(c);
                assert!(
                    matches!(
                        category,
                        GeneralCategory::LowercaseLetter
                            | GeneralCategory::ModifierLetter
                            | GeneralCategory::OtherLetter
                    ),
                    "{c:?} ({category:?}) in {word:?} from {token:?}"
                );
                assert!(!c.is_uppercase(), "{c:?} in {word:?} from {token:?}");
                assert!(!is_combining_mark(c), "{c:?} in {word:?} from {token:?}");
            }
        }
    }
}

#[test]
fn normalize_is_idempotent() {
    for token in TOKENS {
        let once = normalize(token);
        let twice = once.as_deref().and_then(normalize);
        assert_eq!(once, twice, "token {token:?}");
    }
}

#[test]
fn normalize_examples() {
    assert_eq!(normalize("naïve").as_deref(), Some("naive"));
    assert_eq!(normalize("Ångström").as_deref(), Some("angstrom"));
    assert_eq!(normalize("über-cool").as_deref(), Some("ubercool"));
    assert_eq!(normalize("don't").as_deref(), Some("dont"));
    assert_eq!(normalize("e\u{301}").as_deref(), Some("e"));
    assert_eq!(normalize("Ελληνικά").as_deref(), Some("ελληνικα"));
    assert_eq!(normalize("Ⓐbc").as_deref(), Some("bc"));
}

#[test]
fn normalize_rejects_non_words() {
    for token in NON_LETTERS {
        assert_eq!(normalize(token), None, "token {token:?}");
    }
}

// ============================================================
// FrequencyMap — bookkeeping
// ============================================================

#[test]
fn record_inserts_then_increments() {
    let mut map = FrequencyMap::new();
    map.record("word".to_string());
    assert_eq!(map.get("word"), Some(1));
    map.record("word".to_string());
    assert_eq!(map.get("word"), Some(2));
    assert_eq!(map.get("other"), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn collecting_words_counts_them() {
    let map: FrequencyMap = ["a", "b", "a"].iter().map(|w| w.to_string()).collect();
    assert_eq!(map.get("a"), Some(2));
    assert_eq!(map.total(), 3);
}

#[test]
fn accented_variants_merge_into_one_entry() {
    let map = count_lines(["café", "CAFÉ"]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("cafe"), Some(2));
}

// ============================================================
// count_lines — invariants
// ============================================================

#[test]
fn total_equals_number_of_surviving_tokens() {
    let expected = LINES
        .iter()
        .flat_map(|line| line.split_whitespace())
        .filter_map(normalize)
        .count() as u64;

    let map = count_lines(LINES);
    assert_eq!(map.total(), expected);
    assert!(map.iter().all(|(_, count)| count >= 1));
}

#[test]
fn counting_is_order_independent() {
    let baseline = count_lines(LINES);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let mut shuffled: Vec<&str> = LINES.to_vec();
        shuffled.shuffle(&mut rng);
        assert_eq!(count_lines(&shuffled), baseline);
    }
}

#[test]
fn counter_and_reader_agree() {
    let mut counter = FrequencyCounter::new();
    for line in LINES {
        counter.feed_line(line);
    }
    let text = LINES.join("\n");
    let from_reader = count_reader(text.as_bytes()).unwrap();
    assert_eq!(counter.finish(), from_reader);
}

#[test]
fn empty_input_gives_empty_map() {
    let map = count_lines(Vec::<String>::new());
    assert!(map.is_empty());
    assert_eq!(map.total(), 0);
}
