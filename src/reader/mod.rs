//! Document reading for recap
//!
//! Turns a file into raw text based on its extension:
//! - `.txt` - plain text (always available)
//! - `.docx` - Word documents (`docx` feature)
//! - `.pdf` - PDF text layer (`pdf` feature)
//!
//! Formats compiled out of the binary fail at call time with
//! [`RecapError::MissingDependency`].

mod text;

#[cfg(feature = "docx")]
mod docx;

#[cfg(feature = "pdf")]
mod pdf;

pub use text::PlainTextParser;

#[cfg(feature = "docx")]
pub use docx::DocxParser;

#[cfg(feature = "pdf")]
pub use pdf::PdfParser;

use std::path::Path;

use crate::{RecapError, Result};

#[cfg(not(feature = "docx"))]
const DOCX_MISSING: &str = "DOCX support requires the `docx` feature. Rebuild with it enabled.";

#[cfg(not(feature = "pdf"))]
const PDF_MISSING: &str = "PDF support requires the `pdf` feature. Rebuild with it enabled.";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    WordProcessor,
    Pdf,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(Self::PlainText),
            "docx" => Ok(Self::WordProcessor),
            "pdf" => Ok(Self::Pdf),
            "" => Err(RecapError::UnsupportedFormat("(no extension)".to_string())),
            other => Err(RecapError::UnsupportedFormat(format!(".{}", other))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::WordProcessor => "docx",
            Self::Pdf => "pdf",
        }
    }

    /// Whether this build can read the format
    pub fn is_available(&self) -> bool {
        match self {
            Self::PlainText => true,
            Self::WordProcessor => cfg!(feature = "docx"),
            Self::Pdf => cfg!(feature = "pdf"),
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::PlainText, Self::WordProcessor, Self::Pdf]
    }
}

/// Extracts raw text from one document format
pub trait DocumentParser {
    /// Read the whole document as text
    fn parse(&self, path: &Path) -> Result<String>;

    /// Parser name for logging
    fn name(&self) -> &'static str;
}

/// Create the parser for a format
pub fn create_parser(format: DocumentFormat) -> Result<Box<dyn DocumentParser>> {
    match format {
        DocumentFormat::PlainText => Ok(Box::new(PlainTextParser)),
        DocumentFormat::WordProcessor => {
            #[cfg(feature = "docx")]
            {
                return Ok(Box::new(DocxParser));
            }
            #[cfg(not(feature = "docx"))]
            {
                Err(RecapError::MissingDependency(DOCX_MISSING.to_string()))
            }
        }
        DocumentFormat::Pdf => {
            #[cfg(feature = "pdf")]
            {
                return Ok(Box::new(PdfParser));
            }
            #[cfg(not(feature = "pdf"))]
            {
                Err(RecapError::MissingDependency(PDF_MISSING.to_string()))
            }
        }
    }
}

/// Read any supported document as raw text
pub fn read_document(path: &Path) -> Result<String> {
    tracing::info!("Reading document: {}", path.display());
    ensure_exists(path)?;

    let format = DocumentFormat::from_path(path)?;
    let parser = create_parser(format)?;
    tracing::debug!("Using {} parser", parser.name());

    parser.parse(path)
}

/// Read the paragraphs of a DOCX file in order
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;

    #[cfg(feature = "docx")]
    {
        return docx::read_paragraphs(path);
    }
    #[cfg(not(feature = "docx"))]
    {
        Err(RecapError::MissingDependency(DOCX_MISSING.to_string()))
    }
}

/// Write one DOCX paragraph per entry, creating parent directories
pub fn write_paragraphs<S: AsRef<str>>(path: &Path, paragraphs: &[S]) -> Result<()> {
    #[cfg(feature = "docx")]
    {
        return docx::write_paragraphs(path, paragraphs);
    }
    #[cfg(not(feature = "docx"))]
    {
        let _ = (path, paragraphs);
        Err(RecapError::MissingDependency(DOCX_MISSING.to_string()))
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(RecapError::NotFound(path.display().to_string()))
    }
}

#[cfg(any(feature = "docx", feature = "pdf"))]
pub(crate) fn document_error(path: &Path, err: impl std::fmt::Display) -> RecapError {
    RecapError::Document {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
