//! Plain text input

use std::path::Path;

use super::DocumentParser;
use crate::Result;

/// Reads UTF-8 text, replacing invalid byte sequences
pub struct PlainTextParser;

impl DocumentParser for PlainTextParser {
    fn parse(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn name(&self) -> &'static str {
        "plain text"
    }
}
