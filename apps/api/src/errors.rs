use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant ends the current request only. Nothing here is process-fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume was uploaded")]
    MissingDocument,

    #[error("Custom prompt is empty")]
    EmptyPrompt,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the size limit")]
    PayloadTooLarge,

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("Evaluation service error: {0}")]
    Service(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, also used by the form page.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingDocument => "MISSING_DOCUMENT",
            AppError::EmptyPrompt => "EMPTY_PROMPT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            AppError::EmptyDocument => "EMPTY_DOCUMENT",
            AppError::DocumentParse(_) => "DOCUMENT_PARSE_ERROR",
            AppError::Service(_) => "SERVICE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingDocument => {
                (StatusCode::BAD_REQUEST, "Please upload a resume.".to_string())
            }
            AppError::EmptyPrompt => (
                StatusCode::BAD_REQUEST,
                "Please provide a custom prompt.".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "The uploaded file exceeds 10 MiB.".to_string(),
            ),
            AppError::EmptyDocument => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "The uploaded PDF has no pages.".to_string(),
            ),
            AppError::DocumentParse(msg) => {
                tracing::warn!("Document parse error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "The uploaded file could not be read as a PDF.".to_string(),
                )
            }
            AppError::Service(msg) => {
                tracing::error!("Evaluation service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The evaluation service request failed.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        assert_eq!(
            AppError::MissingDocument.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EmptyPrompt.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_document_errors_are_unprocessable() {
        assert_eq!(
            AppError::EmptyDocument.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::DocumentParse("bad xref".to_string())
                .into_response()
                .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_oversized_upload_is_payload_too_large() {
        assert_eq!(
            AppError::PayloadTooLarge.into_response().status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_service_error_is_bad_gateway() {
        let response = AppError::Service("quota exceeded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            AppError::MissingDocument.code(),
            AppError::EmptyPrompt.code(),
            AppError::Validation(String::new()).code(),
            AppError::PayloadTooLarge.code(),
            AppError::EmptyDocument.code(),
            AppError::DocumentParse(String::new()).code(),
            AppError::Service(String::new()).code(),
            AppError::Internal(anyhow::anyhow!("boom")).code(),
        ];
        let mut unique = codes.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
    }
}
