use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// The recommendation core is total over its enumerated inputs, so the only
/// failures that reach a client are requests that never made it past
/// extraction.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::InvalidQuery(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };

        tracing::debug!(error = %self, "Rejected request");

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
