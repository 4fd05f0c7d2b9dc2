//! Document text extraction for plan generation from an uploaded file.
//!
//! PDFs go through `pdf-extract` and Word packages through [`docx`]; every other
//! file is read as text. Legacy binary `.doc` files are rejected.

pub mod docx;
pub mod handlers;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Upload size cap (10 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Characters of extracted text returned to the caller.
pub const MAX_EXTRACTED_CHARS: usize = 50_000;

pub const TRUNCATION_MARKER: &str = "\n\n[Content truncated due to length...]";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("file is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("'.{0}' files are not supported; upload a PDF, a Word (.docx) or a text file")]
    Unsupported(String),

    #[error("no text could be extracted from the file")]
    Empty,

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read Word document: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    pub file_name: String,
    pub text: String,
    pub truncated: bool,
    /// Characters in `text`, marker included when truncated.
    pub character_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// A `.doc` that is really an OOXML package is read as one; the pre-2007
/// binary format is not.
fn classify(file_name: &str, bytes: &[u8]) -> Result<DocumentKind, DocumentError> {
    match extension(file_name).as_deref() {
        Some("pdf") => Ok(DocumentKind::Pdf),
        Some("docx") => Ok(DocumentKind::Docx),
        Some("doc") if docx::is_zip_package(bytes) => Ok(DocumentKind::Docx),
        Some("doc") => Err(DocumentError::Unsupported("doc".to_string())),
        _ => Ok(DocumentKind::Text),
    }
}

pub fn extract_document(file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument, DocumentError> {
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(DocumentError::TooLarge {
            size: bytes.len(),
            limit: MAX_DOCUMENT_BYTES,
        });
    }

    let raw = match classify(file_name, bytes)? {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))?
        }
        DocumentKind::Docx => docx::extract_docx_text(bytes)?,
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DocumentError::Empty);
    }

    let (text, truncated) = match raw.char_indices().nth(MAX_EXTRACTED_CHARS) {
        Some((cut, _)) => {
            warn!(
                "Document '{file_name}' exceeds {MAX_EXTRACTED_CHARS} characters; truncating"
            );
            (format!("{}{TRUNCATION_MARKER}", &raw[..cut]), true)
        }
        None => (raw.to_string(), false),
    };

    Ok(ExtractedDocument {
        file_name: file_name.to_string(),
        character_count: text.chars().count(),
        text,
        truncated,
    })
}
