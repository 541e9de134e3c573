use crate::error::ConcordanceError;
use crate::ScriptureReference;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much of the text around the reference point is processed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Book,
    Chapter,
    Verse,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Book, Scope::Chapter, Scope::Verse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Book => "Book",
            Scope::Chapter => "Chapter",
            Scope::Verse => "Verse",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ConcordanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Scope::Book),
            "chapter" => Ok(Scope::Chapter),
            "verse" => Ok(Scope::Verse),
            _ => Err(ConcordanceError::UnknownScope(s.to_string())),
        }
    }
}

/// Whether chapter `chapter_num` falls inside `scope` around `reference`.
pub fn should_process_chapter(scope: Scope, chapter_num: u32, reference: &ScriptureReference) -> bool {
    match scope {
        Scope::Book => true,
        Scope::Chapter | Scope::Verse => chapter_num == reference.chapter_num,
    }
}

/// Whether verse `verse_num` of an already-kept chapter falls inside `scope`.
pub fn should_process_verse(scope: Scope, verse_num: u32, reference: &ScriptureReference) -> bool {
    match scope {
        Scope::Book | Scope::Chapter => true,
        Scope::Verse => verse_num == reference.verse_num,
    }
}
