//! API error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shareview_core::{Envelope, ShareviewError};

/// An error rendered as a failed envelope with a matching status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<ShareviewError> for ApiError {
    fn from(err: ShareviewError) -> Self {
        let status = match err {
            ShareviewError::EmptyPrompt => StatusCode::BAD_REQUEST,
            ShareviewError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "Request rejected");
        }
        (self.status, Json(Envelope::<()>::failure(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_is_bad_request() {
        let err = ApiError::from(ShareviewError::EmptyPrompt);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Prompt must not be empty");
    }

    #[test]
    fn test_config_error_is_server_error() {
        let err = ApiError::from(ShareviewError::invalid_config("bad origin"));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
