pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response body.
///
/// `detail` is a plain message for business errors and a list of
/// [`FieldIssue`]s for requests rejected at the transport boundary.
///
/// # JSON Examples
///
/// ```json
/// { "detail": "Task not found" }
/// ```
///
/// ```json
/// { "detail": [{ "loc": ["body"], "msg": "missing field `title`", "type": "value_error" }] }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message or structured validation issues
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: Value::String(message.into()),
        }
    }

    pub fn issues(issues: &[FieldIssue]) -> Self {
        Self {
            detail: serde_json::to_value(issues).unwrap_or(Value::Null),
        }
    }
}

/// One problem found while decoding a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldIssue {
    /// Where the problem is, e.g. `["path", "id"]` or `["body"]`
    pub loc: Vec<String>,
    /// Description of the problem
    pub msg: String,
    /// Machine-readable classification
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldIssue {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0:?}")]
    Validation(Vec<FieldIssue>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(rejection) => {
                let (code, kind) = classify_json_rejection(&rejection);
                tracing::warn!(
                    error_code = code.code(),
                    "JSON extraction error: {}",
                    rejection.body_text()
                );
                let issue = FieldIssue::new(&["body"], rejection.body_text(), kind);
                (rejection.status(), ErrorResponse::issues(&[issue]))
            }
            AppError::Validation(issues) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    issues
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::issues(&issues),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::message(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorResponse::message(msg))
            }
            AppError::Database(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message(ErrorCode::DatabaseError.default_message()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn classify_json_rejection(rejection: &JsonRejection) -> (ErrorCode, &'static str) {
    match rejection {
        JsonRejection::JsonDataError(_) => (ErrorCode::ValidationError, "value_error"),
        JsonRejection::JsonSyntaxError(_) => (ErrorCode::InvalidJson, "json_invalid"),
        JsonRejection::MissingJsonContentType(_) => {
            (ErrorCode::UnsupportedMediaType, "content_type")
        }
        _ => (ErrorCode::InvalidJson, "body_unreadable"),
    }
}

/// Build an error response from a status and message.
///
/// ```rust,ignore
/// use axum_helpers::errors::error_response;
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, "Not Found");
/// ```
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::message(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_detail() {
        let response = AppError::NotFound("Task not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "detail": "Task not found" }));
    }

    #[tokio::test]
    async fn test_bad_request_renders_detail() {
        let response =
            AppError::BadRequest("Task with this ID already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Task with this ID already exists" })
        );
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_message() {
        let response =
            AppError::Database("connection refused 10.0.0.7:27017".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "detail": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn test_validation_renders_issue_list() {
        let issue = FieldIssue::new(&["path", "id"], "Input should be a valid integer", "int_parsing");
        let response = AppError::Validation(vec![issue]).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "detail": [{
                    "loc": ["path", "id"],
                    "msg": "Input should be a valid integer",
                    "type": "int_parsing"
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(StatusCode::NOT_FOUND, "Not Found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "detail": "Not Found" }));
    }
}
