//! In-memory repository for tests and local runs without MongoDB.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{TaskError, TaskResult};
use crate::models::Task;
use crate::repository::TaskRepository;

/// Thread-safe in-memory task repository.
///
/// Keeps tasks in insertion order so listings are stable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository pre-loaded with `tasks`
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskError {
    TaskError::Database(format!("task store lock poisoned: {err}"))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }

    async fn insert(&self, task: Task) -> TaskResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        if tasks.iter().any(|existing| existing.id == task.id) {
            return Err(TaskError::DuplicateId(task.id));
        }
        tasks.push(task);
        Ok(())
    }

    async fn replace(&self, id: i64, task: Task) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let Some(position) = tasks.iter().position(|existing| existing.id == id) else {
            return Ok(false);
        };
        if task.id != id && tasks.iter().any(|existing| existing.id == task.id) {
            return Err(TaskError::DuplicateId(task.id));
        }
        tasks[position] = task;
        Ok(true)
    }

    async fn delete(&self, id: i64) -> TaskResult<Option<Task>> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let removed = tasks
            .iter()
            .position(|task| task.id == id)
            .map(|position| tasks.remove(position));
        Ok(removed)
    }
}
