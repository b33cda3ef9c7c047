//! # HTTP Errors
//!
//! Request-level failures and their mapping to status codes and bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::representation::{Rendered, Representation};
use crate::model::ErrorPayload;

/// Result type for handlers that render errors in a negotiated representation
pub type ApiResult<T> = Result<T, ErrorResponse>;

/// Request-level errors
///
/// The `Display` text is the message sent to the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Lookup of an id that is not stored
    #[error("User with id {0} not found")]
    UserNotFound(i64),

    /// Update of an id that is not stored
    #[error("Unable to update. User with id {0} not found.")]
    UpdateTargetNotFound(i64),

    /// Delete of an id that is not stored
    #[error("Unable to delete. User with id {0} not found.")]
    DeleteTargetNotFound(i64),

    /// Create with a name that is already taken
    #[error("Unable to create. A User with name {0} already exist.")]
    UserAlreadyExists(String),

    /// Create with an explicit id that is already stored
    #[error("Unable to create. A User with id {0} already exist.")]
    IdAlreadyExists(i64),

    /// Create without an id after every id has been handed out
    #[error("Unable to create. No user id is left to assign.")]
    IdsExhausted,

    /// Body could not be decoded as the declared content type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpdateTargetNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DeleteTargetNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::IdAlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Pair the error with the representation the client asked for
    pub fn represented(self, representation: Representation) -> ErrorResponse {
        ErrorResponse {
            error: self,
            representation,
        }
    }
}

impl From<&ApiError> for ErrorPayload {
    fn from(err: &ApiError) -> Self {
        ErrorPayload::new(err.to_string())
    }
}

/// An error ready to be rendered as JSON or XML
#[derive(Debug)]
pub struct ErrorResponse {
    pub error: ApiError,
    pub representation: Representation,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        Rendered::new(status, self.representation, ErrorPayload::from(&self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::UserNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::UpdateTargetNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::DeleteTargetNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UserAlreadyExists("Sam".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError::IdAlreadyExists(1).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::IdsExhausted.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidBody("eof".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_messages_name_the_resource() {
        assert_eq!(
            ApiError::UserNotFound(42).to_string(),
            "User with id 42 not found"
        );
        assert_eq!(
            ApiError::UserAlreadyExists("Gerry".to_string()).to_string(),
            "Unable to create. A User with name Gerry already exist."
        );
        assert!(ApiError::DeleteTargetNotFound(7).to_string().contains('7'));
    }

    #[test]
    fn test_error_payload_from_error() {
        let payload = ErrorPayload::from(&ApiError::UpdateTargetNotFound(3));
        assert_eq!(
            payload.error_message,
            "Unable to update. User with id 3 not found."
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::UserNotFound(9)
            .represented(Representation::Xml)
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            Representation::Xml.content_type()
        );
    }
}
