//! API routes module
//!
//! Wires the tasks domain, readiness probe and shared middleware into one router.

pub mod health;
pub mod tasks;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi;
use crate::state::AppState;

/// Resource routes; `/tasks` paths are served from the root
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(tasks::router(state))
        .merge(health::router(state.clone()))
}

/// The complete application: routes, docs, liveness endpoints and middleware
pub fn app(state: &AppState) -> Router {
    let apis = routes(state).merge(health_router(state.config.app));
    create_router(apis, openapi::document())
}
