//! Type-safe error codes for structured logs.
//!
//! Each error code has a string identifier, an integer code for log queries and
//! a default human-readable message. Codes are written to logs only; response
//! bodies carry the HTTP status and a `detail` message.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request validation failed
    ValidationError,

    /// Malformed document identifier in a path parameter
    InvalidObjectId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    // Database errors (2000s)
    /// Document store is not connected
    DatabaseUnavailable,

    /// Document store query or write failed
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidObjectId => "INVALID_OBJECT_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidObjectId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,

            Self::DatabaseUnavailable => 2001,
            Self::DatabaseError => 2003,
        }
    }

    /// Default user-facing error message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidObjectId => "Invalid id",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::DatabaseUnavailable => "Database is not available",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
