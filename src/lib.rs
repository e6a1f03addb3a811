//! recap - Extractive summaries for meeting transcripts
//!
//! Reads plain text, DOCX or PDF documents, strips transcript noise and
//! ranks sentences with TextRank.

pub mod cli;
pub mod config;
pub mod logging;
pub mod reader;
pub mod summarizer;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    MissingDependency(String),

    #[error("Failed to read {path}: {message}")]
    Document { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
