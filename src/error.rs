use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::intent::{Operation, ValidationError};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure category to its HTTP status and a fixed, caller-safe
/// message. Store causes never reach this type; they are logged by the
/// adapter and only the failed operation is kept.
#[derive(Debug)]
pub enum ApiError {
    /// Create body lacks userId, name or email
    MissingFields,
    /// Body is not a JSON object or array
    InvalidBody,
    /// The userId path segment is not valid percent-encoded UTF-8
    InvalidPath,
    /// No item stored under the requested userId
    UserNotFound,
    /// The store round trip failed
    Store(Operation),
    /// No route matches the method and path
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody | ApiError::InvalidPath => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UserNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingFields => "Missing required fields",
            ApiError::InvalidBody => "Invalid JSON body",
            ApiError::InvalidPath => "Invalid \"userId\" path parameter",
            ApiError::UserNotFound => "Could not find user with provided \"userId\"",
            ApiError::Store(operation) => operation.failure_message(),
            ApiError::RouteNotFound => "Not Found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });

        (self.status(), body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingFields => ApiError::MissingFields,
            // An empty path segment never names a route.
            ValidationError::MissingUserId => ApiError::RouteNotFound,
        }
    }
}
