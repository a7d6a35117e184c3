//! Integer path parameter extractor.

use crate::errors::{AppError, FieldIssue};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Extractor for a single `i64` path parameter named `id`.
///
/// Anything that does not parse as an integer is rejected with a 422
/// validation error pointing at `["path", "id"]`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_task(IdPath(id): IdPath) -> String {
///     format!("Task {}", id)
/// }
///
/// let app: Router = Router::new().route("/tasks/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::Validation(vec![FieldIssue::new(&["path", "id"], e.body_text(), "missing")])
            })?;

        raw.trim().parse::<i64>().map(IdPath).map_err(|_| {
            AppError::Validation(vec![FieldIssue::new(
                &["path", "id"],
                format!("Input should be a valid integer, unable to parse string as an integer: {raw}"),
                "int_parsing",
            )])
        })
    }
}
