use crate::error::Result;
use crate::reference::record_occurrence;
use crate::scope::{should_process_chapter, should_process_verse, Scope};
use crate::segment::{segment_into_chapters, segment_into_verses};
use crate::snippet::{extract_snippet_with, WordMatcher};
use crate::tokenize::tokenize;
use crate::{ConcordanceEntry, ScriptureReference};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word list ordered by first appearance of each word.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Concordance {
    entries: Vec<ConcordanceEntry>,
}

impl Concordance {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConcordanceEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ConcordanceEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ConcordanceEntry> {
        self.entries
    }

    /// Entry for `word`, compared lowercased.
    pub fn get(&self, word: &str) -> Option<&ConcordanceEntry> {
        let needle = word.to_lowercase();
        self.entries.iter().find(|e| e.word == needle)
    }
}

impl<'a> IntoIterator for &'a Concordance {
    type Item = &'a ConcordanceEntry;
    type IntoIter = std::slice::Iter<'a, ConcordanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Working state of one build. Each word's slot in `entries`, `matchers` and
/// the `index` value agree.
#[derive(Default)]
struct Accumulator {
    entries: Vec<ConcordanceEntry>,
    matchers: Vec<Option<WordMatcher>>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    /// Record one occurrence of `word` (already lowercased) at `reference`.
    fn record(mut self, word: String, reference: ScriptureReference, verse_text: &str) -> Result<Self> {
        let (slot, prior) = match self.index.get(&word) {
            Some(&slot) => (slot, Some(std::mem::take(&mut self.entries[slot].locations))),
            None => {
                let slot = self.entries.len();
                self.matchers.push(WordMatcher::new(&word));
                self.index.insert(word.clone(), slot);
                self.entries.push(ConcordanceEntry::new(word));
                (slot, None)
            }
        };
        let (locations, occurrence) = record_occurrence(prior, reference);
        let snippet = match &self.matchers[slot] {
            Some(matcher) => extract_snippet_with(matcher, verse_text, occurrence)?,
            None => String::new(),
        };
        let entry = &mut self.entries[slot];
        entry.locations = locations;
        entry.snippets.push(snippet);
        Ok(self)
    }

    fn finish(self) -> Concordance {
        Concordance { entries: self.entries }
    }
}

/// Build the word list for the part of `text` selected by `scope` around
/// `reference_point`.
///
/// Chapter and verse numbers are ordinal: the first `\c` segment is chapter 1
/// whatever numeral its marker carries. Every location gets the book number of
/// `reference_point`.
///
/// # Errors
/// Propagates [`crate::ConcordanceError::EmptyVerse`] from snippet extraction;
/// segmented input never yields a tokenized empty verse, so this does not occur
/// for text that tokenizes at all.
pub fn build_concordance(text: &str, reference_point: ScriptureReference, scope: Scope) -> Result<Concordance> {
    let mut acc = Accumulator::default();
    let mut verses_processed = 0usize;
    let mut chapters_processed = 0usize;

    for (ci, chapter_text) in segment_into_chapters(text).into_iter().enumerate() {
        let chapter_num = (ci + 1) as u32;
        if !should_process_chapter(scope, chapter_num, &reference_point) {
            continue;
        }
        chapters_processed += 1;
        trace!("chapter {} ({} bytes)", chapter_num, chapter_text.len());

        for (vi, verse_text) in segment_into_verses(chapter_text).into_iter().enumerate() {
            let verse_num = (vi + 1) as u32;
            if !should_process_verse(scope, verse_num, &reference_point) {
                continue;
            }
            verses_processed += 1;
            for token in tokenize(verse_text) {
                let reference = ScriptureReference {
                    book_num: reference_point.book_num,
                    chapter_num,
                    verse_num,
                };
                acc = acc.record(token.to_lowercase(), reference, verse_text)?;
            }
        }
    }

    let concordance = acc.finish();
    debug!(
        "concordance for {} scope at {}: {} chapters, {} verses, {} distinct words",
        scope,
        reference_point,
        chapters_processed,
        verses_processed,
        concordance.len()
    );
    Ok(concordance)
}
