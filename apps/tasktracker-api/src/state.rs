//! Application state shared with the routers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// Database the task collection lives in
    pub db: Database,
}
