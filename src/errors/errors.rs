use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the user service
#[derive(Debug)]
pub enum ServiceError {
    // Identifier Errors
    InvalidUserId(String),

    // Lookup Errors
    UserNotFound(String),

    // Validation Errors
    ValidationError(String),

    // Database Errors
    DatabaseError(String),
    DatabaseConnectionError,

    // Internal Errors
    InternalServerError(String),
}

/// Error response structure sent to clients
///
/// Wire shape: `{"error": {"status": <code>, "error": "<message>"}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub error: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::InvalidUserId(id) => write!(f, "Invalid user id: {}", id),
            ServiceError::UserNotFound(id) => write!(f, "User not found: {}", id),
            ServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ServiceError::DatabaseConnectionError => write!(f, "Failed to connect to database"),
            ServiceError::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ServiceError::InvalidUserId(_) | ServiceError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            ServiceError::UserNotFound(_) => StatusCode::NOT_FOUND,

            // 503 Service Unavailable
            ServiceError::DatabaseConnectionError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            ServiceError::DatabaseError(_) | ServiceError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Implement IntoResponse for Axum integration
///
/// The `status` field inside the envelope always matches the transport status code.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ErrorResponse {
            error: ApiError {
                status: status.as_u16(),
                error: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Conversion from mongodb driver errors
impl From<mongodb::error::Error> for ServiceError {
    fn from(err: mongodb::error::Error) -> Self {
        ServiceError::DatabaseError(err.to_string())
    }
}

/// Conversion from validation errors
impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

/// Type alias for Results using ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
