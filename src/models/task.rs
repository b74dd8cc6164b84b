//! Task entity and validated write-side draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::matrix::{classify, Quadrant};
use crate::{AppError, Result};

/// Date format accepted for due dates (`2025-01-31`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task domain entity persisted in `SQLite`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    /// Unique record identifier, assigned by the store on creation.
    pub id: i64,
    /// Task description; never empty after trimming.
    pub content: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Urgency flag for matrix classification.
    pub is_urgent: bool,
    /// Importance flag for matrix classification.
    pub is_important: bool,
    /// Optional deadline; absent means "no deadline".
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Matrix quadrant this task falls into.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        classify(self.is_urgent, self.is_important)
    }
}

/// Validated write-side view of a task: the four mutable fields.
///
/// Construction trims the content and rejects empty input, so a draft in
/// hand is always safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Trimmed, non-empty task description.
    pub content: String,
    /// Urgency flag.
    pub is_urgent: bool,
    /// Importance flag.
    pub is_important: bool,
    /// Optional deadline.
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Build a draft from raw input, trimming the content.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `content` is empty or whitespace-only.
    pub fn new(
        content: &str,
        is_urgent: bool,
        is_important: bool,
        due_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("task content must not be empty".into()));
        }
        Ok(Self {
            content: trimmed.to_owned(),
            is_urgent,
            is_important,
            due_date,
        })
    }
}

/// Parse a raw due-date string in `YYYY-MM-DD` format.
///
/// A malformed or empty value is treated as "no deadline" and discarded;
/// parsing never fails hard.
#[must_use]
pub fn parse_due_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).ok()
}
