use thiserror::Error;

/// Errors raised by the concordance engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConcordanceError {
    /// A snippet was requested from a verse with no text.
    #[error("cannot extract a snippet from an empty verse")]
    EmptyVerse,

    #[error("invalid scripture reference {book} {chapter}:{verse} (components start at 1)")]
    InvalidReference { book: u32, chapter: u32, verse: u32 },

    #[error("unknown scope '{0}' (expected book, chapter or verse)")]
    UnknownScope(String),
}

pub type Result<T> = std::result::Result<T, ConcordanceError>;
