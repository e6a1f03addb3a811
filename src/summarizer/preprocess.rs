//! Transcript cleanup
//!
//! Strips `[HH:MM:SS]` timestamps and speaker labels, then collapses
//! whitespace so the text reads as plain prose.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIMESTAMP: Regex = Regex::new(r"\[\d{2}:\d{2}:\d{2}\]\s*").unwrap();
    // Context-free: any run of capitalized words followed by a colon is
    // treated as a speaker label, wherever it appears.
    static ref SPEAKER_LABEL: Regex =
        Regex::new(r"(?:Speaker \d+|[A-Z][a-z]+(?:\s[A-Z][a-z]+)*):\s*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove transcript artifacts from raw text.
///
/// Passes repeat until the text is stable, since deleting one token can
/// join fragments into a new timestamp or label.
pub fn preprocess(text: &str) -> String {
    let mut current = strip_once(text);

    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let text = TIMESTAMP.replace_all(text, "");
    let text = SPEAKER_LABEL.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
