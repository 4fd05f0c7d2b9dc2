use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::documents::DocumentError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match &err {
            DocumentError::TooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            DocumentError::Unsupported(_) => AppError::UnsupportedMedia(err.to_string()),
            DocumentError::Empty | DocumentError::Pdf(_) | DocumentError::Docx(_) => {
                AppError::UnprocessableEntity(err.to_string())
            }
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::Validation(format!("invalid multipart body: {}", err.body_text()))
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String, Option<Value>) {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
                None,
            ),
            AppError::UnsupportedMedia(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
                None,
            ),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
                None,
            ),
            AppError::Llm(LlmError::MissingCredentials) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CONFIGURATION_ERROR",
                "OpenAI API key not configured".to_string(),
                None,
            ),
            AppError::Llm(LlmError::Upstream { status, body }) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Upstream model API returned status {status}"),
                Some(json!({ "upstreamStatus": status, "upstreamBody": body })),
            ),
            AppError::Llm(LlmError::Transport(_)) => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_UNAVAILABLE",
                "Upstream model API could not be reached".to_string(),
                None,
            ),
            AppError::Llm(e @ (LlmError::Parse(_) | LlmError::EmptyContent)) => (
                StatusCode::BAD_GATEWAY,
                "PARSE_ERROR",
                e.to_string(),
                None,
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
                None,
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        match &self {
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::debug!("Client error ({status}): {message}"),
        }

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_credentials_is_503_configuration_error() {
        let (status, body) = render(AppError::Llm(LlmError::MissingCredentials)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status_and_body() {
        let err = AppError::Llm(LlmError::Upstream {
            status: 429,
            body: "Rate limit reached".to_string(),
        });
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
        assert_eq!(body["error"]["details"]["upstreamStatus"], 429);
        assert_eq!(body["error"]["details"]["upstreamBody"], "Rate limit reached");
    }

    #[tokio::test]
    async fn test_parse_and_empty_content_are_parse_errors() {
        for err in [
            LlmError::Parse("expected value at line 1".to_string()),
            LlmError::EmptyContent,
        ] {
            let (status, body) = render(AppError::Llm(err)).await;
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(body["error"]["code"], "PARSE_ERROR");
            assert!(body["error"].get("details").is_none());
        }
    }

    #[tokio::test]
    async fn test_validation_is_400() {
        let (status, body) = render(AppError::Validation("topic cannot be empty".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "topic cannot be empty");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("secret path"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }

    #[test]
    fn test_document_errors_map_to_client_statuses() {
        let too_large: AppError = DocumentError::TooLarge {
            size: 11 * 1024 * 1024,
            limit: 10 * 1024 * 1024,
        }
        .into();
        assert_eq!(too_large.parts().0, StatusCode::PAYLOAD_TOO_LARGE);

        let unsupported: AppError = DocumentError::Unsupported("doc".to_string()).into();
        assert_eq!(unsupported.parts().0, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let empty: AppError = DocumentError::Empty.into();
        assert_eq!(empty.parts().0, StatusCode::UNPROCESSABLE_ENTITY);

        let corrupt: AppError = DocumentError::Docx("invalid Zip archive".to_string()).into();
        assert_eq!(corrupt.parts().0, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
