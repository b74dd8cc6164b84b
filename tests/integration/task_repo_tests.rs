use chrono::NaiveDate;
use eisenplan::persistence::task_repo::ListFilter;
use eisenplan::AppError;

use super::test_helpers::{draft, memory_pool, repo};

#[tokio::test]
async fn add_assigns_id_and_persists_fields() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let task = repo
        .add(&draft("Pay rent", true, true, Some("2025-01-01")))
        .await
        .expect("add succeeds");

    assert!(task.id > 0);
    assert_eq!(task.content, "Pay rent");
    assert!(!task.completed);
    assert!(task.is_urgent);
    assert!(task.is_important);
    assert_eq!(
        task.due_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"))
    );

    let stored = repo.get(task.id).await.expect("get succeeds");
    assert_eq!(stored, task);
}

#[tokio::test]
async fn add_increases_count_by_one() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    assert_eq!(repo.count().await.expect("count"), 0);
    repo.add(&draft("One", false, false, None)).await.expect("add");
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn ids_are_unique_and_stable() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let first = repo.add(&draft("First", false, false, None)).await.expect("add");
    let second = repo.add(&draft("Second", false, false, None)).await.expect("add");
    assert_ne!(first.id, second.id);

    // Deleting one record never re-keys another.
    repo.delete(first.id).await.expect("delete");
    let still_there = repo.get(second.id).await.expect("get");
    assert_eq!(still_there.content, "Second");
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let err = repo.get(999).await.expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn update_overwrites_all_mutable_fields() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let task = repo
        .add(&draft("Old content", false, false, Some("2025-03-01")))
        .await
        .expect("add");

    let updated = repo
        .update(task.id, &draft("New content", true, true, None))
        .await
        .expect("update succeeds");

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.content, "New content");
    assert!(updated.is_urgent);
    assert!(updated.is_important);
    assert_eq!(updated.due_date, None);
    // Completion is not part of the update surface.
    assert_eq!(updated.completed, task.completed);
}

#[tokio::test]
async fn update_missing_is_not_found_and_store_unchanged() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    repo.add(&draft("Keeper", false, false, None)).await.expect("add");

    let err = repo
        .update(999, &draft("Ghost", true, true, None))
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn toggle_twice_restores_completed() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let task = repo.add(&draft("Flip me", false, false, None)).await.expect("add");
    assert!(!task.completed);

    let once = repo.toggle_complete(task.id).await.expect("toggle");
    assert!(once.completed);

    let twice = repo.toggle_complete(task.id).await.expect("toggle");
    assert!(!twice.completed);
}

#[tokio::test]
async fn toggle_missing_is_not_found() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let err = repo.toggle_complete(42).await.expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_exactly_the_target() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    let doomed = repo.add(&draft("Doomed", false, false, None)).await.expect("add");
    let keeper = repo.add(&draft("Keeper", false, false, None)).await.expect("add");

    repo.delete(doomed.id).await.expect("delete succeeds");

    let err = repo.get(doomed.id).await.expect_err("gone");
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(repo.get(keeper.id).await.is_ok());
}

#[tokio::test]
async fn delete_missing_is_not_found_and_store_unchanged() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    repo.add(&draft("Keeper", false, false, None)).await.expect("add");

    let err = repo.delete(999).await.expect_err("must fail");
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(repo.count().await.expect("count"), 1);

    // Repeat delete of the same missing id stays NotFound.
    let again = repo.delete(999).await.expect_err("still missing");
    assert!(matches!(again, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_unfiltered_returns_all() {
    let pool = memory_pool().await;
    let repo = repo(&pool);

    for content in ["a", "b", "c"] {
        repo.add(&draft(content, false, false, None)).await.expect("add");
    }

    let all = repo.list(ListFilter::default()).await.expect("list");
    assert_eq!(all.len(), 3);
}
