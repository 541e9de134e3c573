use regex::Regex;
use std::sync::OnceLock;

/// USFM markers start with this character; a word glued to it is a marker name.
pub const MARKUP_ESCAPE: char = '\\';

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\b[A-Za-z'’]+\b").expect("word pattern"))
}

/// Word tokens of a verse, left to right, in their original casing.
///
/// A token is a run of Latin letters and apostrophes (`'` or `’`) between word
/// boundaries. Tokens directly preceded by [`MARKUP_ESCAPE`] are control words
/// such as `\p` or `\add` and are skipped.
pub fn tokenize(verse_text: &str) -> Vec<&str> {
    word_pattern()
        .find_iter(verse_text)
        .filter(|m| !verse_text[..m.start()].ends_with(MARKUP_ESCAPE))
        .map(|m| m.as_str())
        .collect()
}
