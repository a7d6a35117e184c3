//! MongoTaskRepository against a real MongoDB
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

use domain_tasks::mongodb::COLLECTION_NAME;
use domain_tasks::{MongoTaskRepository, Task, TaskError, TaskRepository, TaskService};
use mongodb::bson::{Document, doc};
use test_utils::{TestDataBuilder, TestMongo};

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoTaskRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoTaskRepository::new(mongo.database(&builder.database_name()));
    repo.ensure_indexes().await.unwrap();
    repo
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_crud_round_trip() {
    let mongo = TestMongo::new().await;
    let service = TaskService::new(repository(&mongo, "crud_round_trip").await);

    let created = service.create_task(Task::new(1, "Buy milk")).await.unwrap();
    assert_eq!(service.get_task(1).await.unwrap(), created);

    let replacement = Task::new(1, "Buy milk").with_description("2%").completed();
    service.update_task(1, replacement.clone()).await.unwrap();
    assert_eq!(service.get_task(1).await.unwrap(), replacement);

    assert_eq!(service.delete_task(1).await.unwrap(), replacement);
    assert!(matches!(
        service.get_task(1).await,
        Err(TaskError::NotFound(1))
    ));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unique_index_rejects_duplicate_insert() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "unique_index").await;

    repo.insert(Task::new(7, "first")).await.unwrap();
    let result = repo.insert(Task::new(7, "second")).await;

    assert!(matches!(result, Err(TaskError::DuplicateId(7))));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_id_can_be_reused_after_delete() {
    let mongo = TestMongo::new().await;
    let service = TaskService::new(repository(&mongo, "reuse_after_delete").await);

    service.create_task(Task::new(1, "first")).await.unwrap();
    assert!(matches!(
        service.create_task(Task::new(1, "again")).await,
        Err(TaskError::DuplicateId(1))
    ));

    service.delete_task(1).await.unwrap();

    let recreated = service.create_task(Task::new(1, "second")).await.unwrap();
    assert_eq!(service.get_task(1).await.unwrap(), recreated);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_ensure_indexes_fails_over_duplicate_ids() {
    let mongo = TestMongo::new().await;
    let db = mongo.database(&TestDataBuilder::from_test_name("legacy_duplicates").database_name());
    db.collection::<Document>(COLLECTION_NAME)
        .insert_many([doc! { "id": 4_i64, "title": "a" }, doc! { "id": 4_i64, "title": "b" }])
        .await
        .unwrap();

    let result = MongoTaskRepository::new(db).ensure_indexes().await;

    assert!(matches!(result, Err(TaskError::Database(msg)) if msg.contains("duplicate task ids")));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_concurrent_creates_store_one_task() {
    let mongo = TestMongo::new().await;
    let service = TaskService::new(repository(&mongo, "concurrent_creates").await);

    let (a, b) = tokio::join!(
        service.create_task(Task::new(3, "a")),
        service.create_task(Task::new(3, "b")),
    );

    assert!(a.is_ok() ^ b.is_ok());
    assert_eq!(service.list_tasks().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_replace_missing_does_not_upsert() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "replace_missing").await;

    assert!(!repo.replace(5, Task::new(5, "ghost")).await.unwrap());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_ensure_indexes_is_idempotent() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "indexes_twice").await;

    repo.ensure_indexes().await.unwrap();
}
