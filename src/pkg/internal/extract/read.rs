use std::path::Path;

use standard_error::{Interpolate, StandardError};

use crate::prelude::Result;

/// Normalizes a document into lowercase plain text for downstream matching.
///
/// Dispatch is on the declared file extension. Unrecognized extensions yield
/// empty text instead of an error; the pipeline then records the applicant
/// with no extractable facts. A corrupt or unreadable document is surfaced as
/// an extraction error, never swallowed into an empty result.
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let text = match extension.as_str() {
        "pdf" => extract_text_from_pdf(path)?,
        "docx" => extract_text_from_docx(path)?,
        _ => String::new(),
    };
    Ok(text.to_lowercase())
}

fn extract_text_from_pdf(path: &Path) -> Result<String> {
    use lopdf::Document;
    let doc = Document::load(path)
        .map_err(|e| StandardError::new("ERR-EXTRACT-001").interpolate_err(e.to_string()))?;

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                // A page with no extractable text contributes nothing.
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }
    Ok(text)
}

fn extract_text_from_docx(path: &Path) -> Result<String> {
    use docx_rs::read_docx;
    let data = std::fs::read(path)?;
    let docx = read_docx(&data)
        .map_err(|e| StandardError::new("ERR-EXTRACT-002").interpolate_err(e.to_string()))?;
    let mut text = String::new();
    for paragraph in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = paragraph {
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn unknown_extension_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "python java").unwrap();
        assert_eq!(extract_text(&path).unwrap(), "");
    }

    #[test]
    fn missing_extension_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume");
        std::fs::write(&path, "python java").unwrap();
        assert_eq!(extract_text(&path).unwrap(), "");
    }

    #[test]
    fn corrupt_pdf_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not a pdf at all").unwrap();
        assert!(extract_text(&path).is_err());
    }

    #[test]
    fn corrupt_docx_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();
        assert!(extract_text(&path).is_err());
    }
}
