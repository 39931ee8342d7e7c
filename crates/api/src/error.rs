use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use givingchy_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Datastore failures are
/// not classified: a missing row, a constraint violation and a dropped
/// connection all surface as 500 with the datastore's own message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Any error reported by the datastore.
    #[error(transparent)]
    Datastore(#[from] DbError),

    /// The request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// A malformed id path segment, or a failed login.
    #[error("{0}")]
    NotFound(String),

    /// A failure inside this layer, e.g. token signing.
    #[error("{0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Datastore(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
