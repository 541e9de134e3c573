//! Chapter and verse segmentation on `\c` / `\v` markers.
//!
//! The N-th segment returned is chapter (or verse) N. The numeral written in
//! the marker is never read, so non-sequential markup shifts every following
//! number.

use regex::Regex;
use std::sync::OnceLock;

static CHAPTER_MARKER: OnceLock<Regex> = OnceLock::new();
static VERSE_MARKER: OnceLock<Regex> = OnceLock::new();

/// `\c 12` plus one separator character.
fn chapter_marker() -> &'static Regex {
    CHAPTER_MARKER.get_or_init(|| Regex::new(r"\\c\s+\d+(?:\s|$)").expect("chapter marker pattern"))
}

/// `\v 3` plus one separator. Ranges and lettered verses (`\v 3-4`, `\v 3a`)
/// keep their suffix inside the marker.
fn verse_marker() -> &'static Regex {
    VERSE_MARKER.get_or_init(|| Regex::new(r"\\v\s+\d+\S*(?:\s|$)").expect("verse marker pattern"))
}

/// Split a book into chapter texts. Front matter before the first `\c` is dropped.
pub fn segment_into_chapters(text: &str) -> Vec<&str> {
    chapter_marker().split(text).skip(1).collect()
}

/// Split a chapter into verse texts. Headings before the first `\v` are dropped.
pub fn segment_into_verses(chapter_text: &str) -> Vec<&str> {
    verse_marker().split(chapter_text).skip(1).collect()
}
