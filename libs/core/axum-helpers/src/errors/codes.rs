//! Error codes attached to logged errors.
//!
//! Response bodies only carry `detail`; the codes below end up in the
//! `error_code` field of the log event so failures can be grouped in
//! log aggregation.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

/// Error classification used in structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request data failed to deserialize into the expected shape
    ValidationError,

    /// Request body is not valid JSON
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Request was rejected by a business rule
    BadRequest,

    /// Request body lacks a JSON content type
    UnsupportedMediaType,

    /// No handler for the request method on a known path
    MethodNotAllowed,

    // Server errors
    /// Database driver or server error (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    /// Integer code for logging and monitoring.
    ///
    /// - 1000-1999: Client errors
    /// - 2000-2999: Database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::BadRequest => 1006,
            Self::UnsupportedMediaType => 1012,
            Self::MethodNotAllowed => 1013,
            Self::DatabaseError => 2003,
        }
    }

    /// Default user-facing message
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON format",
            Self::NotFound => "Not Found",
            Self::BadRequest => "Bad Request",
            Self::UnsupportedMediaType => "Expected request with `Content-Type: application/json`",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::DatabaseError => "Internal Server Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert!((2000..3000).contains(&ErrorCode::DatabaseError.code()));
    }

    #[test]
    fn test_database_errors_use_generic_message() {
        assert_eq!(ErrorCode::DatabaseError.default_message(), "Internal Server Error");
    }
}
