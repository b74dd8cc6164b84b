//! `SQLite` schema bootstrap logic.
//!
//! All table definitions use `CREATE TABLE IF NOT EXISTS` — safe to
//! re-run on every server startup. Produces a convergent result.

use sqlx::SqlitePool;

use crate::Result;

/// Apply all table definitions to the connected `SQLite` database.
///
/// Idempotent; safe to call on every startup.
///
/// # Errors
///
/// Returns `AppError::Db` if any DDL statement fails.
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    let ddl = r"
CREATE TABLE IF NOT EXISTS task (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    content       TEXT NOT NULL CHECK(length(content) > 0),
    completed     INTEGER NOT NULL DEFAULT 0,
    is_urgent     INTEGER NOT NULL DEFAULT 0,
    is_important  INTEGER NOT NULL DEFAULT 0,
    due_date      TEXT
);

CREATE INDEX IF NOT EXISTS idx_task_flags ON task(is_urgent, is_important);
";

    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}
