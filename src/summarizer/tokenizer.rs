//! Sentence and word tokenization
//!
//! Sentence boundaries are detected on terminal punctuation, with
//! language-specific abbreviations, initials and dotted acronyms
//! ("Mr.", "J.", "U.S.") excluded from ending a sentence. A lone capital
//! letter only counts as an initial when the following word looks like part
//! of a name rather than a sentence opener.

use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashSet;

use super::language::Language;
use super::stopwords::StopwordFilter;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").unwrap();
}

/// A sentence of the cleaned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Position in the document (0-based)
    pub index: usize,
    pub text: String,
}

/// Abbreviation-aware sentence splitter
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: FxHashSet<&'static str>,
    /// Words that typically open a sentence ("The", "We", ...)
    openers: StopwordFilter,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl SentenceTokenizer {
    pub fn new(language: Language) -> Self {
        Self {
            abbreviations: language.abbreviations().iter().copied().collect(),
            openers: StopwordFilter::new(language),
        }
    }

    /// Split text into sentences in document order
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut pieces = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminator(chars[i].1) {
                i += 1;
                continue;
            }

            // Swallow runs like "?!" or ".)" or ."
            let mut j = i + 1;
            while j < chars.len() && (is_terminator(chars[j].1) || is_closing(chars[j].1)) {
                j += 1;
            }

            let at_end = j >= chars.len();
            if at_end || chars[j].1.is_whitespace() {
                let end = if at_end { text.len() } else { chars[j].0 };
                let boundary = chars[i].1 != '.'
                    || at_end
                    || !self.suppresses_break(&text[start..chars[i].0], next_word(&text[end..]));

                if boundary {
                    pieces.push(&text[start..end]);
                    start = end;
                }
            }

            i = j;
        }

        if start < text.len() {
            pieces.push(&text[start..]);
        }

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                text: text.to_string(),
            })
            .collect()
    }

    /// Whether a period after `before` is part of a token rather than a sentence end
    fn suppresses_break(&self, before: &str, next: Option<&str>) -> bool {
        let next_first = next.and_then(|word| word.chars().next());
        if next_first.is_some_and(char::is_lowercase) {
            return true;
        }

        let token = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        if token.is_empty() {
            return false;
        }

        if self.abbreviations.contains(token.as_str()) {
            return true;
        }

        let mut chars = token.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return letter.is_alphabetic() && self.continues_name(next);
        }

        // Dotted acronyms ("U.S.", "e.g.", "p.m.")
        token.contains('.')
            && token.split('.').all(|part| {
                let len = part.chars().count();
                (1..=2).contains(&len) && part.chars().all(char::is_alphabetic)
            })
    }

    /// Whether the word after a single-letter token reads as the rest of a
    /// name ("J. R. Tolkien") instead of a new sentence ("option B. The ...")
    fn continues_name(&self, next: Option<&str>) -> bool {
        let Some(word) = next else {
            return false;
        };

        if word.chars().count() == 1 {
            return word.chars().all(char::is_uppercase);
        }

        word.chars().next().is_some_and(char::is_uppercase)
            && !self.openers.is_stopword(&word.to_lowercase())
    }
}

/// Lowercase word tokens of a sentence
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase())
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | ')' | ']')
}

fn next_word(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !c.is_alphanumeric())
        .unwrap_or(rest.len());

    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
