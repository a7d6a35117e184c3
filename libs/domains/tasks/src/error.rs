use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound(i64),

    #[error("Task with this ID already exists")]
    DuplicateId(i64),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::NotFound(err.to_string()),
            TaskError::DuplicateId(_) => AppError::BadRequest(err.to_string()),
            TaskError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for TaskError {
    fn from(err: mongodb::error::Error) -> Self {
        TaskError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for TaskError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        TaskError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_messages_match_response_detail() {
        assert_eq!(TaskError::NotFound(3).to_string(), "Task not found");
        assert_eq!(
            TaskError::DuplicateId(3).to_string(),
            "Task with this ID already exists"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TaskError::NotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TaskError::DuplicateId(1).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TaskError::Database("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
