pub mod batch;
pub mod build;
pub mod snippet;

use crate::Selection;
use anyhow::Context;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use wordlist_core::books::detect_book;
use wordlist_core::text_utils::decode_text_bytes;
use wordlist_core::{Scope, ScriptureReference};

/// File contents, or all of stdin when no file is given.
pub(crate) fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    let bytes = match file {
        Some(p) => fs::read(p).with_context(|| format!("failed to read {}", p.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };
    Ok(decode_text_bytes(&bytes))
}

/// Explicit book, else the `\id` line, else $WORDLIST_BOOK, else 1.
pub(crate) fn resolve_book(explicit: Option<u32>, text: &str) -> u32 {
    explicit
        .or_else(|| detect_book(text))
        .or_else(|| env::var("WORDLIST_BOOK").ok().and_then(|v| v.trim().parse().ok()))
        .unwrap_or(1)
}

pub(crate) fn reference_point(sel: &Selection, text: &str) -> anyhow::Result<(ScriptureReference, Scope)> {
    let scope: Scope = sel.scope.parse()?;
    let book = resolve_book(sel.book, text);
    let point = ScriptureReference::new(book, sel.chapter, sel.verse)?;
    Ok((point, scope))
}
