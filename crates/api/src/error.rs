use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinema_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`] to produce plain-text error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinema_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                // Malformed query parameters are reported as 404, the status
                // existing clients of the list endpoint check for.
                CoreError::Validation(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, message).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key and unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            tracing::warn!(error = %db_err, "Foreign key violation");
            (
                StatusCode::CONFLICT,
                "Referenced record does not exist or is still referenced".to_string(),
            )
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!(error = %db_err, "Unique constraint violation");
            (
                StatusCode::CONFLICT,
                "Duplicate value violates a unique constraint".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
