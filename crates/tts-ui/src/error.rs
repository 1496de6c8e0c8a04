//! UI error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised while handling panel events.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Upload with an extension the panel does not accept.
    #[error("unsupported file type: {0} (only .txt is accepted)")]
    UnsupportedFileType(String),

    /// File name that would escape the inputs directory or is empty.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),

    /// Selected file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// File content is not valid UTF-8 text.
    #[error("file is not valid UTF-8 text: {0}")]
    InvalidText(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with UiError.
pub type UiResult<T> = Result<T, UiError>;

impl UiError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedFileType(_) | Self::InvalidFileName(_) | Self::InvalidText(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Input panel request failed");
        } else {
            tracing::debug!(error = %self, "Rejected input panel request");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
