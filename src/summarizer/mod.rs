//! Extractive summarization
//!
//! Cleans transcript text, splits it into sentences, ranks the sentences
//! with TextRank over a cosine-similarity graph and keeps the top ones in
//! document order.

mod graph;
mod language;
mod preprocess;
mod rank;
mod stopwords;
mod tokenizer;

pub use graph::{SimilarityGraph, TermVector};
pub use language::Language;
pub use preprocess::preprocess;
pub use rank::{RankResult, TextRank};
pub use stopwords::StopwordFilter;
pub use tokenizer::{Sentence, SentenceTokenizer};

use serde::Serialize;
use std::path::Path;

use crate::reader;

/// Returned by [`summarize_document`] when the document has no text
pub const EMPTY_DOCUMENT_MESSAGE: &str =
    "Could not read any text from the document or document is empty.";

/// Language used when none is configured
pub const DEFAULT_LANGUAGE: &str = "english";

/// A sentence with its centrality score
#[derive(Debug, Clone, Serialize)]
pub struct RankedSentence {
    /// Position in the cleaned document
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// TextRank summarizer bound to one language's resources
#[derive(Debug, Clone)]
pub struct Summarizer {
    language: Language,
    tokenizer: SentenceTokenizer,
    stopwords: StopwordFilter,
    ranker: TextRank,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl Summarizer {
    /// Create a summarizer for a language name or code.
    ///
    /// Unknown languages fall back to English with a warning.
    pub fn new(language: &str) -> Self {
        let language = Language::resolve(language);
        Self {
            language,
            tokenizer: SentenceTokenizer::new(language),
            stopwords: StopwordFilter::new(language),
            ranker: TextRank::default(),
        }
    }

    pub fn with_ranker(mut self, ranker: TextRank) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Score every sentence of the cleaned text, in document order
    pub fn rank(&self, text: &str) -> Vec<RankedSentence> {
        let cleaned = preprocess(text);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let sentences = self.tokenizer.sentences(&cleaned);
        let vectors: Vec<TermVector> = sentences
            .iter()
            .map(|s| TermVector::from_sentence(&s.text, &self.stopwords))
            .collect();

        let graph = SimilarityGraph::from_vectors(&vectors);
        let result = self.ranker.run(&graph);

        sentences
            .into_iter()
            .zip(result.scores)
            .map(|(sentence, score)| RankedSentence {
                index: sentence.index,
                text: sentence.text,
                score,
            })
            .collect()
    }

    /// Pick the `sentence_count` best sentences, returned in document order.
    ///
    /// Counts below 1 are treated as 1.
    pub fn select(&self, text: &str, sentence_count: usize) -> Vec<RankedSentence> {
        let ranked = self.rank(text);
        let count = sentence_count.max(1).min(ranked.len());

        let scores: Vec<f64> = ranked.iter().map(|s| s.score).collect();
        let mut keep: Vec<usize> = rank::top_n(&scores, count)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        keep.sort_unstable();

        let mut ranked: Vec<Option<RankedSentence>> = ranked.into_iter().map(Some).collect();
        keep.into_iter().filter_map(|i| ranked[i].take()).collect()
    }

    /// Newline-joined summary of `text`
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        let selected = self.select(text, sentence_count);
        tracing::debug!(
            "Selected {} sentence(s) for a {} summary",
            selected.len(),
            self.language
        );

        selected
            .into_iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Summarize text in `language`, keeping at most `sentence_count` sentences.
///
/// Empty or artifact-only input yields an empty string.
pub fn summarize(text: &str, sentence_count: usize, language: &str) -> String {
    Summarizer::new(language).summarize(text, sentence_count)
}

/// Non-empty paragraphs of a DOCX file joined with newlines.
///
/// Returns `None` when the document has no text or cannot be parsed; the
/// parse failure is logged. A missing file or a build without DOCX support
/// is still an error.
pub fn read_document_text(path: &Path) -> crate::Result<Option<String>> {
    tracing::info!("Reading DOCX for summarization: {}", path.display());

    let raw_text = match reader::read_paragraphs(path) {
        Ok(paragraphs) => paragraphs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err @ (crate::RecapError::NotFound(_) | crate::RecapError::MissingDependency(_))) => {
            return Err(err)
        }
        Err(err) => {
            tracing::error!("Failed to read DOCX {}: {}", path.display(), err);
            String::new()
        }
    };

    Ok(Some(raw_text).filter(|text| !text.is_empty()))
}

/// Summarize the paragraphs of a DOCX file.
///
/// A document without any text is not an error: the fixed
/// [`EMPTY_DOCUMENT_MESSAGE`] is returned instead.
pub fn summarize_document(
    path: &Path,
    sentence_count: usize,
    language: &str,
) -> crate::Result<String> {
    let Some(raw_text) = read_document_text(path)? else {
        return Ok(EMPTY_DOCUMENT_MESSAGE.to_string());
    };

    tracing::info!("Preprocessing text for summarization");
    Ok(summarize(&raw_text, sentence_count, language))
}
