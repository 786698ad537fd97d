//! Résumé text extraction. Never fails past its boundary: every problem ends
//! up as the `error` field of a `ResumeText` with empty text.

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extracted text is cut to this many characters.
pub const MAX_RESUME_CHARS: usize = 5000;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no file was uploaded")]
    MissingFile,

    #[error("could not read upload: {0}")]
    Upload(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("PDF parser crashed on this document")]
    Panicked,
}

/// Response body of `/parse-resume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResumeText {
    pub fn ok(text: String) -> Self {
        Self { text, error: None }
    }

    pub fn failed(error: &ExtractionError) -> Self {
        Self {
            text: String::new(),
            error: Some(error.to_string()),
        }
    }
}

impl From<Result<String, ExtractionError>> for ResumeText {
    fn from(result: Result<String, ExtractionError>) -> Self {
        match result {
            Ok(text) => ResumeText::ok(text),
            Err(e) => ResumeText::failed(&e),
        }
    }
}

/// Extracts the text of a PDF, page by page, truncated to `MAX_RESUME_CHARS`.
pub fn extract_text(bytes: &[u8]) -> ResumeText {
    extract_pages(bytes).map(|pages| join_pages(&pages)).into()
}

fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Pdf("document is empty".to_string()));
    }

    // pdf-extract panics on some malformed documents instead of returning Err.
    panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| ExtractionError::Panicked)?
    .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Concatenates page texts in order and keeps the first `MAX_RESUME_CHARS`.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .flat_map(|page| page.as_ref().chars())
        .take(MAX_RESUME_CHARS)
        .collect()
}
