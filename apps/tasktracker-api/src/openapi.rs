//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level OpenAPI document; domain paths are merged in by [`document`]
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Tracker API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for managing to-do tasks",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// The complete document served at `/api-docs/openapi.json`
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_tasks::ApiDoc::openapi());
    doc
}
