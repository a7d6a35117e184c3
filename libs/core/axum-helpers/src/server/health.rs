use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

/// Liveness body served on `/` and `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Readiness body: overall status plus one entry per dependency
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub checks: BTreeMap<String, &'static str>,
}

/// A boxed dependency probe; `Err` carries the reason it failed
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs the named probes concurrently.
///
/// Responds 200 `{"status": "ready", "<name>": "connected"}` when every probe
/// succeeds, otherwise 503 with `"not ready"` and the failing probes marked
/// `"disconnected"`.
///
/// # Example
/// ```ignore
/// let checks = vec![(
///     "database",
///     Box::pin(async { ping(&client).await.map_err(|e| e.to_string()) }) as HealthCheckFuture<'_>,
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> Response {
    let (names, probes): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(probes).await;

    let mut ready = true;
    let mut statuses = BTreeMap::new();

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!("Readiness check failed: {} error: {}", name, e);
                ready = false;
                "disconnected"
            }
        };
        statuses.insert(name.to_string(), state);
    }

    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    };

    (
        status,
        Json(ReadyResponse {
            status: label,
            checks: statuses,
        }),
    )
        .into_response()
}

/// Always 200 while the process is serving.
pub async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// Liveness routes `/` and `/health`.
///
/// # Example
/// ```ignore
/// use axum_helpers::health_router;
/// use core_config::app_info;
///
/// let router = create_router(api_routes.merge(health_router(app_info!())), openapi);
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .with_state(app_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const INFO: AppInfo = AppInfo {
        name: "tasktracker-api",
        version: "0.1.0",
    };

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health_report_app_info() {
        for uri in ["/", "/health"] {
            let response = health_router(INFO)
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                body_json(response).await,
                json!({ "status": "healthy", "name": "tasktracker-api", "version": "0.1.0" })
            );
        }
    }

    #[tokio::test]
    async fn test_all_checks_pass() {
        let checks = vec![("database", Box::pin(async { Ok(()) }) as HealthCheckFuture<'_>)];
        let response = run_health_checks(checks).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "ready", "database": "connected" })
        );
    }

    #[tokio::test]
    async fn test_failing_check_is_unavailable() {
        let checks = vec![
            (
                "database",
                Box::pin(async { Err("timed out".to_string()) }) as HealthCheckFuture<'_>,
            ),
            ("other", Box::pin(async { Ok(()) }) as HealthCheckFuture<'_>),
        ];
        let response = run_health_checks(checks).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "not ready", "database": "disconnected", "other": "connected" })
        );
    }
}
