// Résumé upload: PDF text extraction for the assessment flow.
// Nothing is stored; the extracted text goes straight back to the caller.

pub mod extractor;
pub mod handlers;
