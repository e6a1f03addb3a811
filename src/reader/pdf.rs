//! PDF text extraction using lopdf

use lopdf::Document;
use std::path::Path;

use super::{document_error, DocumentParser};
use crate::Result;

/// Extracts the text layer page by page
pub struct PdfParser;

impl DocumentParser for PdfParser {
    fn parse(&self, path: &Path) -> Result<String> {
        let document = Document::load(path).map_err(|e| document_error(path, e))?;

        let pages: Vec<u32> = document.get_pages().keys().copied().collect();
        tracing::debug!("PDF has {} page(s)", pages.len());

        // Pages without a usable text layer contribute an empty line
        let parts: Vec<String> = pages
            .iter()
            .map(|&page| {
                document.extract_text(&[page]).unwrap_or_else(|err| {
                    tracing::debug!("No text extracted from page {}: {}", page, err);
                    String::new()
                })
            })
            .collect();

        Ok(parts.join("\n"))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
