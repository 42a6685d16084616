use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("ID is required.")]
    MissingId,

    #[error("Invalid ID.")]
    InvalidId,

    #[error("Valid ID is required.")]
    NonPositiveId,

    #[error("Language code is required.")]
    MissingLanguageCode,

    #[error("Valid Language code is required.")]
    InvalidLanguageCode,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Environment variable missing: {0}")]
    MissingEnvVar(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError to HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingId
            | AppError::InvalidId
            | AppError::NonPositiveId
            | AppError::MissingLanguageCode
            | AppError::InvalidLanguageCode => (StatusCode::BAD_REQUEST, self.to_string()),

            // Retrieval failures are already logged at the service layer;
            // the response carries no internal detail.
            AppError::Database(_) | AppError::Decode(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get data.".to_string(),
            ),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
        };

        let body = json!({
            "error": error_message,
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let errors = vec![
            AppError::MissingId,
            AppError::InvalidId,
            AppError::NonPositiveId,
            AppError::MissingLanguageCode,
            AppError::InvalidLanguageCode,
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_retrieval_errors_map_to_500() {
        let decode_error = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
        let response = AppError::Decode(decode_error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(AppError::MissingId.to_string(), "ID is required.");
        assert_eq!(AppError::InvalidId.to_string(), "Invalid ID.");
        assert_eq!(AppError::NonPositiveId.to_string(), "Valid ID is required.");
        assert_eq!(
            AppError::MissingLanguageCode.to_string(),
            "Language code is required."
        );
        assert_eq!(
            AppError::InvalidLanguageCode.to_string(),
            "Valid Language code is required."
        );
    }
}
