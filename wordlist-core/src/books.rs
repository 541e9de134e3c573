//! USFM book codes and their canonical numbers.

use regex::Regex;
use std::sync::OnceLock;

/// Book codes in canonical order; book N is `BOOK_CODES[N - 1]`.
pub const BOOK_CODES: [&str; 66] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH", "2CH",
    "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK", "DAN", "HOS",
    "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL", "MAT", "MRK", "LUK",
    "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH", "2TH", "1TI", "2TI", "TIT",
    "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD", "REV",
];

static ID_LINE: OnceLock<Regex> = OnceLock::new();

/// 1-based book number for a three-letter code, any case.
pub fn book_number(code: &str) -> Option<u32> {
    let code = code.trim().to_ascii_uppercase();
    BOOK_CODES
        .iter()
        .position(|c| *c == code)
        .map(|i| (i + 1) as u32)
}

pub fn book_code(number: u32) -> Option<&'static str> {
    let idx = usize::try_from(number).ok()?.checked_sub(1)?;
    BOOK_CODES.get(idx).copied()
}

/// Book number named by the `\id` line, if any.
pub fn detect_book(text: &str) -> Option<u32> {
    let re = ID_LINE.get_or_init(|| Regex::new(r"(?m)^\s*\\id\s+([0-9A-Za-z]{3})\b").expect("id line pattern"));
    re.captures(text).and_then(|caps| book_number(&caps[1]))
}
