use anyhow::Context;
use wordlist_core::extract_snippet;

pub fn snippet(text: &str, word: &str, occurrence: usize) -> anyhow::Result<()> {
    let s = extract_snippet(text, word, occurrence).context("snippet extraction failed")?;
    if s.is_empty() {
        log::info!("occurrence {} of '{}' not found", occurrence, word);
    }
    println!("{}", s);
    Ok(())
}
