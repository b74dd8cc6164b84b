use std::sync::Arc;

use eisenplan::persistence::{db, schema};
use eisenplan::persistence::task_repo::TaskRepo;

use super::test_helpers::draft;

#[tokio::test]
async fn connect_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("tasks.db");

    let pool = db::connect(&path).await.expect("connect");
    assert!(path.exists());
    pool.close().await;
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let pool = db::connect_memory().await.expect("connect");
    // connect_memory already applied the schema once; re-running converges.
    schema::bootstrap_schema(&pool).await.expect("re-apply schema");
    schema::bootstrap_schema(&pool).await.expect("re-apply schema");
}

#[tokio::test]
async fn data_survives_reconnect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tasks.db");

    let pool = db::connect(&path).await.expect("connect");
    let repo = TaskRepo::new(Arc::new(pool.clone()));
    let task = repo
        .add(&draft("Durable", true, false, Some("2025-04-04")))
        .await
        .expect("add");
    pool.close().await;

    let reopened = db::connect(&path).await.expect("reconnect");
    let repo = TaskRepo::new(Arc::new(reopened.clone()));
    let stored = repo.get(task.id).await.expect("get after reconnect");
    assert_eq!(stored, task);
    reopened.close().await;
}

#[tokio::test]
async fn empty_content_is_rejected_at_the_schema_too() {
    let pool = db::connect_memory().await.expect("connect");

    // The CHECK constraint backs up draft validation at the storage layer.
    let result = sqlx::query("INSERT INTO task (content) VALUES ('')")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}
