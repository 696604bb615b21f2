//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record (title, notes, done flag, timestamps).
//! - Normalize user input and reject invalid titles before anything persists.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty after trimming; constructors and updates enforce it.
//! - `notes` is `None` when the user supplied nothing meaningful.
//! - `updated_at >= created_at`, and every touch strictly increases
//!   `updated_at` even when two mutations land in the same millisecond.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical to-do record.
///
/// Fields are public so the repository and the visible-set engine can read
/// them directly; all mutations should go through the methods below so the
/// title and timestamp invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, assigned at creation.
    pub id: TaskId,
    /// Short summary. Non-empty after trim.
    pub title: String,
    /// Optional free-form detail text. Never `Some("")`.
    pub notes: Option<String>,
    /// Completion flag.
    pub is_done: bool,
    /// Unix epoch milliseconds. Set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds. Refreshed on every field mutation.
    pub updated_at: i64,
}

impl Task {
    /// Creates a validated task, or `None` when the trimmed title is empty.
    ///
    /// Rejection is deliberately silent: the caller keeps its input for
    /// correction and nothing reaches the store.
    pub fn new(
        title: &str,
        notes: Option<&str>,
        is_done: bool,
        now_ms: i64,
    ) -> Option<Self> {
        let title = normalize_title(title)?;
        Some(Self {
            id: Uuid::new_v4(),
            title,
            notes: normalize_notes(notes),
            is_done,
            created_at: now_ms,
            updated_at: now_ms,
        })
    }

    /// Applies a full edit (title, notes, done flag) in one step.
    ///
    /// Returns `false` and leaves the task entirely unchanged when the
    /// trimmed title is empty. On success all three fields are overwritten
    /// and `updated_at` is touched.
    pub fn apply_update(
        &mut self,
        title: &str,
        notes: Option<&str>,
        is_done: bool,
        now_ms: i64,
    ) -> bool {
        let Some(title) = normalize_title(title) else {
            return false;
        };
        self.title = title;
        self.notes = normalize_notes(notes);
        self.is_done = is_done;
        self.touch(now_ms);
        true
    }

    /// Flips the done flag. Always succeeds.
    pub fn toggle_done(&mut self, now_ms: i64) {
        self.is_done = !self.is_done;
        self.touch(now_ms);
    }

    /// Moves `updated_at` forward.
    ///
    /// The `+ 1` floor keeps the timestamp strictly increasing per task when
    /// consecutive mutations fall into the same millisecond.
    fn touch(&mut self, now_ms: i64) {
        self.updated_at = now_ms.max(self.updated_at + 1);
    }
}

/// Trims a title and returns it, or `None` when nothing remains.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes notes input: absent or blank-after-trim becomes `None`.
pub fn normalize_notes(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
