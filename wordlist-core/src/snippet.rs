//! Context snippets around one occurrence of a word in a verse.

use crate::error::{ConcordanceError, Result};
use log::warn;
use regex::{Match, Regex};

/// Characters of context taken on each side of the match before widening to
/// whitespace.
pub const CONTEXT_CHARS: usize = 40;

/// Case-insensitive whole-word search for one word.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    re: Regex,
}

impl WordMatcher {
    /// `None` for an empty word, which has nothing to match.
    pub fn new(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
        Regex::new(&pattern).ok().map(|re| Self { re })
    }

    /// The `occurrence`-th match (1-based) scanning left to right.
    pub fn nth_match<'t>(&self, text: &'t str, occurrence: usize) -> Option<Match<'t>> {
        let idx = occurrence.checked_sub(1)?;
        self.re.find_iter(text).nth(idx)
    }
}

/// Snippet for the `occurrence`-th (1-based) appearance of `word` in `verse_text`.
///
/// The match is uppercased; the window around it is [`CONTEXT_CHARS`] on each
/// side, widened until it starts and ends next to whitespace or the ends of the
/// verse. Returns an empty string when the verse has fewer matches than asked.
///
/// # Errors
/// [`ConcordanceError::EmptyVerse`] when `verse_text` is empty.
pub fn extract_snippet(verse_text: &str, word: &str, occurrence: usize) -> Result<String> {
    match WordMatcher::new(word) {
        Some(matcher) => extract_snippet_with(&matcher, verse_text, occurrence),
        None if verse_text.is_empty() => Err(ConcordanceError::EmptyVerse),
        None => Ok(String::new()),
    }
}

/// [`extract_snippet`] for the first occurrence.
pub fn extract_first_snippet(verse_text: &str, word: &str) -> Result<String> {
    extract_snippet(verse_text, word, 1)
}

/// [`extract_snippet`] with a prebuilt matcher, for callers snippeting the same
/// word many times.
pub fn extract_snippet_with(matcher: &WordMatcher, verse_text: &str, occurrence: usize) -> Result<String> {
    if verse_text.is_empty() {
        return Err(ConcordanceError::EmptyVerse);
    }
    let Some(m) = matcher.nth_match(verse_text, occurrence) else {
        warn!(
            "occurrence {} of /{}/ not found in verse text; leaving snippet empty",
            occurrence,
            matcher.re.as_str()
        );
        return Ok(String::new());
    };

    // Window arithmetic is in characters; slicing converts back to bytes.
    let chars: Vec<(usize, char)> = verse_text.char_indices().collect();
    let total = chars.len();
    let match_start = chars.partition_point(|(b, _)| *b < m.start());
    let match_end = chars.partition_point(|(b, _)| *b < m.end());

    let mut start = match_start.saturating_sub(CONTEXT_CHARS);
    let mut end = std::cmp::min(match_end + CONTEXT_CHARS, total);
    while start > 0 && !chars[start - 1].1.is_whitespace() {
        start -= 1;
    }
    while end < total && !chars[end].1.is_whitespace() {
        end += 1;
    }

    let byte_at = |i: usize| chars.get(i).map(|(b, _)| *b).unwrap_or(verse_text.len());
    let (s_byte, e_byte) = (byte_at(start), byte_at(end));
    let highlighted = m.as_str().to_uppercase();
    let mut out = String::with_capacity(e_byte - s_byte + highlighted.len());
    out.push_str(&verse_text[s_byte..m.start()]);
    out.push_str(&highlighted);
    out.push_str(&verse_text[m.end()..e_byte]);
    Ok(out)
}
