use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use roadline_sdk::SdkError;

/// Server lifecycle errors (startup, configuration, shutdown).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] roadline_store::StoreError),

    #[error("index error: {0}")]
    Index(#[from] roadline_index::IndexError),

    #[error("ledger error: {0}")]
    Ledger(#[from] roadline_ledger::LedgerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server lifecycle operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request error: a status code plus the message returned to the caller
/// as `{"error": message}`.
///
/// Mapping: missing/empty input is 400, unknown identifiers and unavailable
/// content are 404, everything else is a 500. No structured error codes and
/// no retry guidance; the message string is the whole contract.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<SdkError> for ApiError {
    fn from(err: SdkError) -> Self {
        match &err {
            SdkError::EmptyRecord => Self::bad_request(err.to_string()),
            SdkError::UnknownCid | SdkError::ContentUnavailable => {
                Self::not_found(err.to_string())
            }
            // An empty identifier offered to the ledger is a caller mistake,
            // not a server fault.
            SdkError::Ledger(roadline_ledger::LedgerError::EmptyIdentifier) => {
                Self::bad_request(err.to_string())
            }
            SdkError::InvalidRecord(_)
            | SdkError::Store(_)
            | SdkError::Index(_)
            | SdkError::Ledger(_) => Self::internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_maps_to_400() {
        let api: ApiError = SdkError::EmptyRecord.into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_cid_maps_to_404() {
        let api: ApiError = SdkError::UnknownCid.into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);

        let api: ApiError = SdkError::ContentUnavailable.into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn empty_ledger_identifier_maps_to_400() {
        let api: ApiError =
            SdkError::Ledger(roadline_ledger::LedgerError::EmptyIdentifier).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let io = std::io::Error::other("disk gone");
        let api: ApiError = SdkError::Store(roadline_store::StoreError::Io(io)).into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
