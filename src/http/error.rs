//! Error mapping from service failures to HTTP responses.

use crate::todo::services::TodoServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error returned by the HTTP handlers.
///
/// Lookup misses map to `404 Not Found` with the failure message as a
/// plain-text body; storage failures map to a bare `500`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] TodoServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ TodoServiceError::NotFound(_) => {
                (StatusCode::NOT_FOUND, err.to_string()).into_response()
            }
            TodoServiceError::Repository(err) => {
                tracing::error!(error = %err, "storage failure while handling request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
