use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::Task;

/// Repository trait for Task persistence
///
/// Tasks are addressed by their client-chosen `id`, never by the store's
/// internal key. Implementations must reject a second task with an id that
/// is already stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get a task by its id
    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// All stored tasks
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Store a new task; `TaskError::DuplicateId` if the id is taken
    async fn insert(&self, task: Task) -> TaskResult<()>;

    /// Overwrite every field of the task stored under `id`.
    ///
    /// Returns `false` when no task has that id.
    async fn replace(&self, id: i64, task: Task) -> TaskResult<bool>;

    /// Remove the task stored under `id`, returning it as it was
    async fn delete(&self, id: i64) -> TaskResult<Option<Task>>;
}
