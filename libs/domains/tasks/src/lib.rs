//! Tasks Domain
//!
//! CRUD over to-do tasks stored in MongoDB. Task ids are chosen by the client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /tasks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Duplicate / not-found rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{handlers, mongodb::MongoTaskRepository, service::TaskService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("tasktracker");
//!
//! let repository = MongoTaskRepository::new(db);
//! repository.ensure_indexes().await?;
//!
//! let router = handlers::router(TaskService::new(repository));
//! # Ok(())
//! # }
//! ```
//!
//! # Existing data
//!
//! `ensure_indexes` refuses to build the unique index over a `tasks`
//! collection that already holds two documents with the same `id`, or
//! several without one. Find them before the first start:
//!
//! ```text
//! db.tasks.aggregate([
//!   { $group: { _id: "$id", n: { $sum: 1 } } },
//!   { $match: { n: { $gt: 1 } } }
//! ])
//! ```
//!
//! then delete or renumber all but one document per group.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTaskRepository;
pub use models::Task;
pub use mongodb::MongoTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
