//! Axum route handler for document text extraction.

use axum::{extract::Multipart, Json};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::documents::{extract_document, ExtractedDocument};
use crate::errors::AppError;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// POST /api/v1/documents/extract
///
/// Accepts a multipart upload with a `file` field and returns its text, ready
/// to be sent back as `documentText` on a plan request.
pub async fn handle_extract_document(
    mut multipart: Multipart,
) -> Result<Json<ExtractedDocument>, AppError> {
    let span = info_span!("extract_document", request_id = %Uuid::new_v4());

    async move {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = field.file_name().unwrap_or("upload.txt").to_string();
            let bytes = field.bytes().await?;

            // pdf parsing is CPU-bound
            let document = tokio::task::spawn_blocking(move || extract_document(&file_name, &bytes))
                .await
                .map_err(|e| anyhow::anyhow!("document extraction task failed: {e}"))??;

            info!(
                "Extracted {} characters from '{}' (truncated: {})",
                document.character_count, document.file_name, document.truncated
            );
            return Ok(Json(document));
        }

        Err::<Json<ExtractedDocument>, _>(AppError::Validation(format!(
            "multipart field '{FILE_FIELD}' is required"
        )))
    }
    .instrument(span)
    .await
}
