//! Tasks API routes
//!
//! Wires the tasks domain to the shared MongoDB database.

use axum::Router;
use domain_tasks::{MongoTaskRepository, TaskService, handlers};
use tracing::info;

use crate::state::AppState;

/// Create tasks router
pub fn router(state: &AppState) -> Router {
    let repository = MongoTaskRepository::new(state.db.clone());
    handlers::router(TaskService::new(repository))
}

/// Create the unique index on task ids
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    MongoTaskRepository::new(db.clone())
        .ensure_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create task indexes: {}", e))?;
    info!("Task collection indexes created");
    Ok(())
}
