//! JSON body extractor with structured rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Deserializes the request body into `T`.
///
/// Behaves like [`axum::Json`] but rejects with [`AppError`], so a missing
/// field, a wrongly typed field, malformed JSON or a missing content type all
/// produce a `{"detail": [...]}` body. Status codes follow axum's rejections:
/// 422 for data errors, 400 for syntax errors, 415 for a missing content type.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateTask {
///     id: i64,
///     title: String,
/// }
///
/// async fn create_task(JsonBody(payload): JsonBody<CreateTask>) -> String {
///     format!("Creating task: {}", payload.title)
/// }
///
/// let app: Router = Router::new().route("/tasks/", post(create_task));
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        title: String,
    }

    async fn post_body(content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let app = Router::new().route(
            "/",
            post(|JsonBody(payload): JsonBody<Payload>| async move { payload.title }),
        );

        let mut request = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = app
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let (status, _) = post_body(Some("application/json"), r#"{"title":"Buy milk"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let (status, body) = post_body(Some("application/json"), r#"{}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["type"], "value_error");
        assert_eq!(body["detail"][0]["loc"][0], "body");
    }

    #[tokio::test]
    async fn test_wrong_type_is_unprocessable() {
        let (status, _) = post_body(Some("application/json"), r#"{"title": 5}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let (status, body) = post_body(Some("application/json"), r#"{"title": "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"][0]["type"], "json_invalid");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let (status, _) = post_body(None, r#"{"title":"Buy milk"}"#).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
