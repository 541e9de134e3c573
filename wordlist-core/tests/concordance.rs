use std::collections::HashSet;
use wordlist_core::segment::{segment_into_chapters, segment_into_verses};
use wordlist_core::tokenize::tokenize;
use wordlist_core::{build_concordance, extract_snippet, Concordance, Scope, ScriptureReference};

const PSALMS: &str = "\\id PSA\n\\h Psalms\n\
\\c 1\n\\q1\n\\v 1 Blessed is the man who walks not in the counsel of the wicked,\n\
\\q2 nor stands in the way of sinners, nor sits in the seat of scoffers;\n\
\\v 2 but his delight is in the law of the \\nd Lord\\nd*, and on his law he meditates day and night.\n\
\\c 2\n\\q1\n\\v 1 Why do the nations rage and the peoples plot in vain?\n\
\\v 2 The kings of the earth set themselves, and the rulers take counsel together, \
against the \\nd Lord\\nd* and against his Anointed, saying,\n";

fn point(chapter: u32, verse: u32) -> ScriptureReference {
    ScriptureReference::new(19, chapter, verse).unwrap()
}

fn occurrences(c: &Concordance) -> Vec<(String, ScriptureReference, String)> {
    c.iter()
        .flat_map(|e| {
            e.locations
                .iter()
                .zip(&e.snippets)
                .map(move |(r, s)| (e.word.clone(), *r, s.clone()))
        })
        .collect()
}

#[test]
fn distinct_entries_match_distinct_tokens() {
    let c = build_concordance(PSALMS, point(1, 1), Scope::Book).unwrap();
    let tokens: HashSet<String> = segment_into_chapters(PSALMS)
        .into_iter()
        .flat_map(segment_into_verses)
        .flat_map(tokenize)
        .map(str::to_lowercase)
        .collect();
    let words: Vec<&str> = c.iter().map(|e| e.word.as_str()).collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    assert_eq!(words.len(), unique.len());
    assert_eq!(unique.len(), tokens.len());
    assert!(tokens.iter().all(|t| unique.contains(t.as_str())));
}

#[test]
fn locations_and_snippets_stay_paired() {
    for scope in Scope::ALL {
        let c = build_concordance(PSALMS, point(2, 2), scope).unwrap();
        assert!(c.iter().all(|e| e.locations.len() == e.snippets.len()));
    }
}

#[test]
fn repeated_builds_are_identical() {
    let a = build_concordance(PSALMS, point(1, 2), Scope::Chapter).unwrap();
    let b = build_concordance(PSALMS, point(1, 2), Scope::Chapter).unwrap();
    assert_eq!(a, b);
}

#[test]
fn narrower_scopes_are_subsets() {
    let book = occurrences(&build_concordance(PSALMS, point(2, 2), Scope::Book).unwrap());
    let chapter = occurrences(&build_concordance(PSALMS, point(2, 2), Scope::Chapter).unwrap());
    let verse = occurrences(&build_concordance(PSALMS, point(2, 2), Scope::Verse).unwrap());
    assert!(verse.len() < chapter.len() && chapter.len() < book.len());
    assert!(verse.iter().all(|o| chapter.contains(o)));
    assert!(chapter.iter().all(|o| book.contains(o)));
}

#[test]
fn control_words_never_become_entries() {
    let c = build_concordance(PSALMS, point(1, 1), Scope::Book).unwrap();
    for marker in ["id", "h", "q", "nd"] {
        assert!(c.get(marker).is_none(), "marker {marker} leaked into the word list");
    }
    // The word inside \nd ... \nd* is still Scripture text.
    assert_eq!(c.get("lord").unwrap().locations, vec![point(1, 2), point(2, 2)]);
}

#[test]
fn genesis_opening_scenario() {
    let text = "\\c 1 \\v 1 In the beginning God created the heavens. \\v 2 And the earth was formless.";
    let c = build_concordance(text, ScriptureReference::default(), Scope::Book).unwrap();
    let the = c.get("the").unwrap();
    let v1 = ScriptureReference::new(1, 1, 1).unwrap();
    let v2 = ScriptureReference::new(1, 1, 2).unwrap();
    assert_eq!(the.locations, vec![v1, v1, v2]);
    assert_eq!(the.snippets[0], "In THE beginning God created the heavens. ");
    assert_eq!(the.snippets[1], "In the beginning God created THE heavens. ");
    assert_eq!(the.snippets[2], "And THE earth was formless.");
    assert_eq!(c.get("god").unwrap().locations, vec![v1]);
}

#[test]
fn occurrence_disambiguation() {
    let verse = "the cat sat on the mat near the door";
    let s: Vec<String> = (1..=4).map(|k| extract_snippet(verse, "the", k).unwrap()).collect();
    assert_eq!(s[0], "THE cat sat on the mat near the door");
    assert_eq!(s[1], "the cat sat on THE mat near the door");
    assert_eq!(s[2], "the cat sat on the mat near THE door");
    assert_eq!(s[3], "");
}

#[test]
fn snippets_never_cut_words() {
    let c = build_concordance(PSALMS, point(1, 1), Scope::Book).unwrap();
    let verses: Vec<&str> = segment_into_chapters(PSALMS)
        .into_iter()
        .flat_map(segment_into_verses)
        .collect();
    for (_, _, snippet) in occurrences(&c) {
        assert!(!snippet.is_empty());
        // Locate the snippet in its verse by restoring the highlighted word's case.
        let found = verses.iter().any(|v| {
            v.char_indices().any(|(start, _)| {
                let rest = &v[start..];
                rest.len() >= snippet.len()
                    && rest.is_char_boundary(snippet.len())
                    && rest[..snippet.len()].eq_ignore_ascii_case(&snippet)
                    && v[..start].chars().last().map_or(true, char::is_whitespace)
                    && rest[snippet.len()..].chars().next().map_or(true, char::is_whitespace)
            })
        });
        assert!(found, "snippet not aligned to whitespace: {snippet:?}");
    }
}

#[test]
fn out_of_order_markers_are_numbered_by_position() {
    // Characterizes current behavior: marker numerals are ignored.
    let text = "\\c 3 \\v 7 first \\c 1 \\v 9 second";
    let c = build_concordance(text, ScriptureReference::default(), Scope::Book).unwrap();
    assert_eq!(c.get("first").unwrap().locations, vec![ScriptureReference::new(1, 1, 1).unwrap()]);
    assert_eq!(c.get("second").unwrap().locations, vec![ScriptureReference::new(1, 2, 1).unwrap()]);
}

#[test]
fn missing_verse_marker_merges_verses() {
    let text = "\\c 1 \\v 1 alpha \\v beta \\v 3 gamma";
    let c = build_concordance(text, ScriptureReference::default(), Scope::Book).unwrap();
    assert_eq!(c.get("beta").unwrap().locations, c.get("alpha").unwrap().locations);
    assert_eq!(c.get("gamma").unwrap().locations[0].verse_num, 2);
}
