//! Task repository over the `SQLite` pool.
//!
//! Every mutating operation is atomic: multi-statement mutations run
//! inside an explicit transaction that commits or rolls back as a unit,
//! single-statement mutations are their own atomic unit.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::models::task::{Task, TaskDraft};
use crate::{AppError, Result};

const SELECT_COLUMNS: &str =
    "SELECT id, content, completed, is_urgent, is_important, due_date FROM task";

const GET_BY_ID: &str =
    "SELECT id, content, completed, is_urgent, is_important, due_date FROM task WHERE id = ?";

/// List ordering: open tasks first, earliest deadline first with undated
/// tasks last, ties broken by insertion order.
const LIST_ORDER: &str = "ORDER BY completed ASC, due_date IS NULL ASC, due_date ASC, id ASC";

/// Tri-state filters for the list operation.
///
/// `None` places no constraint on that flag; `Some(value)` requires an
/// exact match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Constraint on `is_urgent`, if any.
    pub urgent: Option<bool>,
    /// Constraint on `is_important`, if any.
    pub important: Option<bool>,
}

/// Repository wrapper around the `SQLite` pool for task records.
#[derive(Clone)]
pub struct TaskRepo {
    pool: Arc<SqlitePool>,
}

impl TaskRepo {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Insert a new task record and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the insert fails; the transaction is
    /// rolled back and no record is persisted.
    pub async fn add(&self, draft: &TaskDraft) -> Result<Task> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO task (content, completed, is_urgent, is_important, due_date) \
             VALUES (?, 0, ?, ?, ?)",
        )
        .bind(&draft.content)
        .bind(draft.is_urgent)
        .bind(draft.is_important)
        .bind(draft.due_date)
        .execute(&mut *tx)
        .await?;

        let task = sqlx::query_as::<_, Task>(GET_BY_ID)
            .bind(inserted.last_insert_rowid())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(task)
    }

    /// List all tasks matching the given tri-state filters, in the
    /// canonical ordering.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn list(&self, filter: ListFilter) -> Result<Vec<Task>> {
        let mut sql = String::from(SELECT_COLUMNS);
        let mut clauses: Vec<&str> = Vec::new();
        if filter.urgent.is_some() {
            clauses.push("is_urgent = ?");
        }
        if filter.important.is_some() {
            clauses.push("is_important = ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(LIST_ORDER);

        let mut query = sqlx::query_as::<_, Task>(&sql);
        if let Some(urgent) = filter.urgent {
            query = query.bind(urgent);
        }
        if let Some(important) = filter.important {
            query = query.bind(important);
        }

        query
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(AppError::from)
    }

    /// Retrieve a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the task does not exist.
    pub async fn get(&self, id: i64) -> Result<Task> {
        sqlx::query_as::<_, Task>(GET_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no task with id {id}")))
    }

    /// Overwrite all four mutable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the task does not exist, or
    /// `AppError::Db` if persistence fails; either way the transaction is
    /// rolled back and the stored record is unchanged.
    pub async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE task SET content = ?, is_urgent = ?, is_important = ?, due_date = ? \
             WHERE id = ?",
        )
        .bind(&draft.content)
        .bind(draft.is_urgent)
        .bind(draft.is_important)
        .bind(draft.due_date)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("no task with id {id}")));
        }

        let task = sqlx::query_as::<_, Task>(GET_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(task)
    }

    /// Flip the `completed` flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the task does not exist.
    pub async fn toggle_complete(&self, id: i64) -> Result<Task> {
        let toggled = sqlx::query("UPDATE task SET completed = NOT completed WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if toggled.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("no task with id {id}")));
        }

        self.get(id).await
    }

    /// Permanently remove a task record.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the task does not exist.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM task WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("no task with id {id}")));
        }

        Ok(())
    }

    /// Count all task records, ignoring filters.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Db` if the query fails.
    pub async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM task")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count.unsigned_abs())
    }
}
