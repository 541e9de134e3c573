//! Concordance engine for USFM-style Scripture text.
//!
//! Raw marked-up text goes in, an ordered word list comes out: every distinct
//! word with each location it occurs at and a context snippet for that
//! occurrence. The whole transform is synchronous and in-memory; a call owns
//! all of its working state, so independent calls may run on separate threads.
//!
//! Chapter and verse numbers are taken from the ordinal position of the
//! `\c` / `\v` markers, not from the numerals written after them. Markup with
//! gaps or out-of-order markers is numbered silently wrong rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod books;
pub mod concordance;
pub mod error;
pub mod reference;
pub mod scope;
pub mod segment;
pub mod snippet;
pub mod text_utils;
pub mod tokenize;
pub mod word_list;

pub use concordance::{build_concordance, Concordance};
pub use error::{ConcordanceError, Result};
pub use scope::Scope;
pub use snippet::extract_snippet;

/// A (book, chapter, verse) location. All components start at 1.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureReference {
    pub book_num: u32,
    pub chapter_num: u32,
    pub verse_num: u32,
}

impl ScriptureReference {
    pub fn new(book_num: u32, chapter_num: u32, verse_num: u32) -> Result<Self> {
        if book_num == 0 || chapter_num == 0 || verse_num == 0 {
            return Err(ConcordanceError::InvalidReference {
                book: book_num,
                chapter: chapter_num,
                verse: verse_num,
            });
        }
        Ok(Self { book_num, chapter_num, verse_num })
    }
}

impl Default for ScriptureReference {
    fn default() -> Self {
        Self { book_num: 1, chapter_num: 1, verse_num: 1 }
    }
}

impl fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book_num, self.chapter_num, self.verse_num)
    }
}

/// One distinct word and every place it was seen.
///
/// `locations[i]` and `snippets[i]` always describe the same occurrence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceEntry {
    /// Lowercased word; unique within a [`Concordance`].
    pub word: String,
    #[serde(rename = "scrRefs")]
    pub locations: Vec<ScriptureReference>,
    #[serde(rename = "scriptureSnippets")]
    pub snippets: Vec<String>,
}

impl ConcordanceEntry {
    pub(crate) fn new(word: String) -> Self {
        Self { word, locations: Vec::new(), snippets: Vec::new() }
    }

    /// Number of recorded occurrences.
    pub fn count(&self) -> usize {
        self.locations.len()
    }
}
