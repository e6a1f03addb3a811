//! DOCX reading and writing
//!
//! A DOCX file is a zip package; the body lives in `word/document.xml` as
//! WordprocessingML. Only paragraph text is of interest here: `w:p`
//! paragraphs made of `w:t` runs, with `w:tab` and `w:br` kept as
//! whitespace.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::{document_error, DocumentParser};
use crate::Result;

const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Reads a DOCX body as newline-separated paragraphs
pub struct DocxParser;

impl DocumentParser for DocxParser {
    fn parse(&self, path: &Path) -> Result<String> {
        Ok(read_paragraphs(path)?.join("\n"))
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}

/// Paragraph texts in document order, empty paragraphs included
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| document_error(path, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| document_error(path, e))?
        .read_to_string(&mut xml)?;

    let paragraphs = parse_paragraphs(&xml).map_err(|e| document_error(path, e))?;
    tracing::debug!(
        "Read {} paragraph(s) from {}",
        paragraphs.len(),
        path.display()
    );

    Ok(paragraphs)
}

/// Write a minimal DOCX package with one paragraph per entry
pub fn write_paragraphs<S: AsRef<str>>(path: &Path, paragraphs: &[S]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let document = document_xml(paragraphs);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut zip = ZipWriter::new(File::create(path)?);
    for (name, contents) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", PACKAGE_RELS),
        (DOCUMENT_PART, document.as_str()),
    ] {
        zip.start_file(name, options)
            .map_err(|e| document_error(path, e))?;
        zip.write_all(contents.as_bytes())?;
    }
    zip.finish().map_err(|e| document_error(path, e))?;

    Ok(())
}

fn document_xml<S: AsRef<str>>(paragraphs: &[S]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\"><w:body>",
    );

    for paragraph in paragraphs {
        let text = paragraph.as_ref();
        if text.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            xml.push_str("<w:p><w:r><w:t xml:space=\"preserve\">");
            xml.push_str(&escape(text));
            xml.push_str("</w:t></w:r></w:p>");
        }
    }

    xml.push_str("<w:sectPr/></w:body></w:document>");
    xml
}

fn parse_paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // Open paragraphs, innermost last; text boxes nest `w:p` inside `w:p`
    let mut open: Vec<String> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" if run_depth > 0 => push_char(&mut open, '\t'),
                b"br" | b"cr" if run_depth > 0 => push_char(&mut open, '\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(open: &mut [String], c: char) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecapError;
    use tempfile::tempdir;

    #[test]
    fn parses_runs_tabs_and_breaks() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:pPr><w:tabs><w:tab w:val="left"/></w:tabs></w:pPr>
              <w:r><w:t>Speaker 1:</w:t></w:r><w:r><w:tab/><w:t xml:space="preserve">Tom &amp; Jerry</w:t></w:r></w:p>
            <w:p/>
            <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>line two</w:t></w:r></w:p>
        </w:body></w:document>"#;

        let paragraphs = parse_paragraphs(xml).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "Speaker 1:\tTom & Jerry".to_string(),
                String::new(),
                "Line one\nline two".to_string(),
            ]
        );
    }

    #[test]
    fn nested_paragraphs_keep_outer_text() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t xml:space="preserve">Before the box </w:t></w:r>
              <w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Boxed note</w:t></w:r></w:p></w:txbxContent></w:pict></w:r>
              <w:r><w:t>and after.</w:t></w:r></w:p>
            <w:p><w:r><w:t>Next paragraph.</w:t></w:r></w:p>
        </w:body></w:document>"#;

        let paragraphs = parse_paragraphs(xml).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "Boxed note".to_string(),
                "Before the box and after.".to_string(),
                "Next paragraph.".to_string(),
            ]
        );
    }

    #[test]
    fn written_documents_read_back() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("nested/out.docx");
        let lines = ["First <point> & more.", "", "Second point."];

        write_paragraphs(&path, &lines).unwrap();
        let paragraphs = read_paragraphs(&path).unwrap();

        assert_eq!(paragraphs, lines);
        assert_eq!(
            DocxParser.parse(&path).unwrap(),
            "First <point> & more.\n\nSecond point."
        );
    }

    #[test]
    fn rejects_files_that_are_not_docx() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("fake.docx");
        std::fs::write(&path, "plain text pretending").unwrap();

        let err = read_paragraphs(&path).unwrap_err();
        assert!(matches!(err, RecapError::Document { .. }));
    }
}
