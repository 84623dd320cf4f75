use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lienguard_core::CoreError;
use lienguard_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for persistence
/// errors, plus a validation variant carrying the collected message list.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lienguard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `lienguard_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// The submitted facts failed validation; carries the full message list.
    #[error("Validation failed")]
    Validation(Vec<String>),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone())
                }
            },

            AppError::Db(DbError::Sqlx(err)) => classify_sqlx_error(err),
            AppError::Db(DbError::Serialization(err)) => {
                tracing::error!(error = %err, "Payload serialization error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });

        // Validation failures carry the full message list for the form layer.
        if let AppError::Validation(errors) = &self {
            body["details"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique or primary-key constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // SQLite extended codes: 2067 = SQLITE_CONSTRAINT_UNIQUE,
            // 1555 = SQLITE_CONSTRAINT_PRIMARYKEY.
            if matches!(db_err.code().as_deref(), Some("2067") | Some("1555")) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Duplicate value violates a unique constraint".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
