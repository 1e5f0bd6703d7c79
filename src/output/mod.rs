// Output formatting — terminal display and graph export.

pub mod json;
pub mod terminal;

/// Join `words` with ", " while the line stays within `max_chars` characters.
///
/// Words that do not fit are summarized as "(+N more)". At least one word is
/// always shown, so a single very long word is never hidden entirely.
pub fn preview_words(words: &[&str], max_chars: usize) -> String {
    let mut line = String::new();
    let mut width = 0;
    let mut shown = 0;

    for word in words {
        let word_width = word.chars().count();
        let sep = if shown == 0 { 0 } else { 2 };
        if shown > 0 && width + sep + word_width > max_chars {
            break;
        }
        if shown > 0 {
            line.push_str(", ");
        }
        line.push_str(word);
        width += sep + word_width;
        shown += 1;
    }

    let hidden = words.len() - shown;
    if hidden > 0 {
        line.push_str(&format!(" (+{hidden} more)"));
    }
    line
}
