//! Pure parsing of text-model output
//!
//! The model is prompted for structured answers (a bare number, a
//! comma-separated list) but replies with free text. These helpers pull the
//! structure back out and are kept free of I/O so the edge cases stay
//! independently testable.

use std::sync::LazyLock;

use regex::Regex;

/// First run of digits in the text, allowing comma grouping separators.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("amount regex is valid"));

/// Extract the first monetary amount from model output.
///
/// Grouping commas are stripped ("1,50,000" parses as 150000). When the text
/// contains several digit runs the first one wins. Returns `None` when no
/// digit occurs or the run overflows `u64`.
pub fn first_amount(text: &str) -> Option<u64> {
    let m = AMOUNT_RE.find(text)?;
    m.as_str().replace(',', "").parse().ok()
}

/// Split model output into candidate names.
///
/// Newlines are treated as commas, entries are trimmed, empties dropped, and
/// case-insensitive duplicates removed keeping first-seen order.
pub fn split_candidates(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for part in text.replace('\n', ",").split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let key = part.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(part.to_string());
        }
    }
    out
}
