//! Axum route handlers for résumé upload.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::resume::extractor::{extract_text, ExtractionError, ResumeText};

/// Upload size accepted by `/parse-resume`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /parse-resume
///
/// Multipart field `file`. Always 200: failures are reported in the `error`
/// field of the body, next to an empty `text`.
pub async fn handle_parse_resume(
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ResumeText> {
    let bytes = match read_file_field(multipart).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Resume upload rejected: {e}");
            return Json(ResumeText::failed(&e));
        }
    };

    info!("Extracting text from uploaded resume ({} bytes)", bytes.len());
    let result = tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .unwrap_or_else(|_| ResumeText::failed(&ExtractionError::Panicked));

    if let Some(error) = &result.error {
        warn!("Resume extraction failed: {error}");
    }

    Json(result)
}

async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Bytes, ExtractionError> {
    let mut multipart = multipart.map_err(|e| ExtractionError::Upload(e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ExtractionError::Upload(e.body_text()))?
    {
        if field.name() == Some("file") {
            return field
                .bytes()
                .await
                .map_err(|e| ExtractionError::Upload(e.body_text()));
        }
    }

    Err(ExtractionError::MissingFile)
}
