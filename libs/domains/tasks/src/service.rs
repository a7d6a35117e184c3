//! Task Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::Task;
use crate::repository::TaskRepository;

/// Task service providing the CRUD operations
///
/// Owns the not-found and duplicate-id rules; the repository only stores.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store `task` and echo it back.
    ///
    /// Fails with `DuplicateId` when a task with the same id exists. The
    /// repository rejects the insert too, so two racing creates cannot both win.
    #[instrument(skip(self, task), fields(task_id = task.id))]
    pub async fn create_task(&self, task: Task) -> TaskResult<Task> {
        if self.repository.find_by_id(task.id).await?.is_some() {
            return Err(TaskError::DuplicateId(task.id));
        }

        self.repository.insert(task.clone()).await?;

        tracing::info!(task_id = task.id, "Task created successfully");
        Ok(task)
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Overwrite the task stored under `id` with `task`.
    ///
    /// Returns `task` as submitted, not re-read from storage. Its `id` may
    /// differ from `id`, in which case the stored task is re-keyed.
    #[instrument(skip(self, task))]
    pub async fn update_task(&self, id: i64, task: Task) -> TaskResult<Task> {
        if !self.repository.replace(id, task.clone()).await? {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!(task_id = id, "Task updated successfully");
        Ok(task)
    }

    /// Remove the task stored under `id` and return it
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<Task> {
        let removed = self
            .repository
            .delete(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        tracing::info!(task_id = id, "Task deleted successfully");
        Ok(removed)
    }
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
