//! Core domain logic for the todolist app.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_notes, normalize_title, now_epoch_ms, Task, TaskId};
pub use query::pager::{Pager, PagerState, PAGE_SIZE, REFRESH_DELAY_MS, SETTLE_DELAY_MS};
pub use query::visible::{
    parse_sort_option, parse_status_filter, sort_option_as_str, status_filter_as_str,
    visible_tasks, SortOption, StatusFilter, VisibleQuery,
};
pub use repo::prefs_repo::{PrefsRepository, SqlitePrefsRepository, ViewPrefs};
pub use repo::task_repo::{RepoError, RepoResult, SqliteTaskRepository, TaskRepository};
pub use service::task_service::{
    AddOutcome, FeedbackSink, Intensity, NoFeedback, TaskService, UpdateOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
