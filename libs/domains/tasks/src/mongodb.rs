//! MongoDB implementation of TaskRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{TaskError, TaskResult};
use crate::models::Task;
use crate::repository::TaskRepository;

/// Collection tasks are stored in
pub const COLLECTION_NAME: &str = "tasks";

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB implementation of the TaskRepository
///
/// Documents carry the client's `id` as a regular field next to the server's
/// `_id`. A unique index on `id` backs the duplicate check.
pub struct MongoTaskRepository {
    collection: Collection<Task>,
}

impl MongoTaskRepository {
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoTaskRepository::new(client.database("tasktracker"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, COLLECTION_NAME)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Task>(collection_name);
        Self { collection }
    }

    /// Create the unique index on `id`. Safe to call on every startup.
    ///
    /// Fails when stored documents already share an `id`, or when more than
    /// one document lacks the field. Those have to be cleaned up by hand first.
    pub async fn ensure_indexes(&self) -> TaskResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("task_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await.map_err(|e| {
            if is_duplicate_key(&e) {
                tracing::error!(
                    collection = %self.collection.name(),
                    error = %e,
                    "Cannot create unique index on `id`: existing tasks share an id or lack one. \
                     Remove or renumber them, then restart"
                );
                TaskError::Database(format!("duplicate task ids prevent unique index: {e}"))
            } else {
                e.into()
            }
        })?;
        tracing::info!(collection = %self.collection.name(), "Task indexes ensured");
        Ok(())
    }

    fn by_id(id: i64) -> Document {
        doc! { "id": id }
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        // Index builds report the violation as a command error
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_write_error(err: MongoError, id: i64) -> TaskError {
    if is_duplicate_key(&err) {
        TaskError::DuplicateId(id)
    } else {
        err.into()
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let task = self.collection.find_one(Self::by_id(id)).await?;
        Ok(task)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let cursor = self.collection.find(doc! {}).await?;
        let tasks: Vec<Task> = cursor.try_collect().await?;
        Ok(tasks)
    }

    #[instrument(skip(self, task), fields(task_id = task.id))]
    async fn insert(&self, task: Task) -> TaskResult<()> {
        self.collection
            .insert_one(&task)
            .await
            .map_err(|e| map_write_error(e, task.id))?;

        tracing::info!(task_id = task.id, "Task stored");
        Ok(())
    }

    #[instrument(skip(self, task))]
    async fn replace(&self, id: i64, task: Task) -> TaskResult<bool> {
        let update = doc! { "$set": to_document(&task)? };
        let result = self
            .collection
            .update_one(Self::by_id(id), update)
            .await
            .map_err(|e| map_write_error(e, task.id))?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> TaskResult<Option<Task>> {
        let removed = self.collection.find_one_and_delete(Self::by_id(id)).await?;
        Ok(removed)
    }
}
