use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Only PDF files are supported.")]
    InvalidFileType,

    #[error("Error reading PDF file.")]
    UnreadablePdf,

    #[error("No readable text found in PDF.")]
    NoTextFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload exceeds the maximum allowed size")]
    PayloadTooLarge,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `INVALID_FILE_TYPE`.
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidFileType | AppError::UnreadablePdf | AppError::NoTextFound => {
                StatusCode::BAD_REQUEST
            }
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::InvalidFileType => ("INVALID_FILE_TYPE", self.to_string()),
            AppError::UnreadablePdf => ("UNREADABLE_PDF", self.to_string()),
            AppError::NoTextFound => ("NO_TEXT_FOUND", self.to_string()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge => ("PAYLOAD_TOO_LARGE", self.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_failures_share_bad_request_with_distinct_messages() {
        let errors = [
            AppError::InvalidFileType,
            AppError::UnreadablePdf,
            AppError::NoTextFound,
        ];
        for err in &errors {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
        let messages: std::collections::HashSet<String> =
            errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_no_text_message_matches_public_contract() {
        assert_eq!(
            AppError::NoTextFound.to_string(),
            "No readable text found in PDF."
        );
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let response = AppError::Internal(anyhow::anyhow!("disk on fire")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_uses_code_and_message_envelope() {
        let response = AppError::InvalidFileType.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": {
                    "code": "INVALID_FILE_TYPE",
                    "message": "Only PDF files are supported."
                }
            })
        );
    }

    #[test]
    fn test_validation_maps_to_unprocessable_entity() {
        let err = AppError::Validation("missing field `file`".to_string());
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
