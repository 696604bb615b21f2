//! Visible-set engine: status filter, search filter, sort.
//!
//! # Responsibility
//! - Compute the exact task sequence a list view renders, in order.
//! - Keep every step deterministic and side-effect free.
//!
//! # Invariants
//! - Steps run in a fixed order: status filter, then search, then sort.
//! - Sorting is stable; equal keys keep their input order.
//! - The engine only borrows tasks for the duration of one pass.

use crate::model::task::Task;
use std::cmp::Ordering;

/// Status filter for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No status filtering.
    #[default]
    All,
    /// Only tasks that are not done.
    Active,
    /// Only tasks that are done.
    Completed,
}

/// Sort option for the list view. Each is a strict total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// `created_at` descending.
    #[default]
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// Case-insensitive title ascending.
    TitleAz,
    /// Case-insensitive title descending.
    TitleZa,
}

/// Inputs for one visible-set derivation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleQuery {
    pub filter: StatusFilter,
    /// Raw search text; trimmed before matching, blank means no search.
    pub search: String,
    pub sort: SortOption,
}

/// Derives the visible task sequence from a store snapshot.
///
/// Tasks in the snapshot are unique by ID (store primary key), so the result
/// is deduplicated by construction.
pub fn visible_tasks<'a>(tasks: &'a [Task], query: &VisibleQuery) -> Vec<&'a Task> {
    let needle = query.search.trim().to_lowercase();

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| match query.filter {
            StatusFilter::All => true,
            StatusFilter::Active => !task.is_done,
            StatusFilter::Completed => task.is_done,
        })
        .filter(|task| needle.is_empty() || matches_search(task, &needle))
        .collect();

    visible.sort_by(|a, b| compare_tasks(a, b, query.sort));
    visible
}

/// Case-insensitive substring match against title or notes.
///
/// `needle` must already be lowercased and non-empty. Absent notes never
/// match.
fn matches_search(task: &Task, needle: &str) -> bool {
    if task.title.to_lowercase().contains(needle) {
        return true;
    }
    task.notes
        .as_deref()
        .is_some_and(|notes| notes.to_lowercase().contains(needle))
}

fn compare_tasks(a: &Task, b: &Task, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Newest => b.created_at.cmp(&a.created_at),
        SortOption::Oldest => a.created_at.cmp(&b.created_at),
        SortOption::TitleAz => compare_titles(a, b),
        SortOption::TitleZa => compare_titles(b, a),
    }
}

fn compare_titles(a: &Task, b: &Task) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Stable string form used by preference persistence and the CLI.
pub fn status_filter_as_str(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "all",
        StatusFilter::Active => "active",
        StatusFilter::Completed => "completed",
    }
}

/// Parses a stored/user-supplied filter name.
pub fn parse_status_filter(value: &str) -> Option<StatusFilter> {
    match value {
        "all" => Some(StatusFilter::All),
        "active" => Some(StatusFilter::Active),
        "completed" => Some(StatusFilter::Completed),
        _ => None,
    }
}

/// Stable string form used by preference persistence and the CLI.
pub fn sort_option_as_str(sort: SortOption) -> &'static str {
    match sort {
        SortOption::Newest => "newest",
        SortOption::Oldest => "oldest",
        SortOption::TitleAz => "title_az",
        SortOption::TitleZa => "title_za",
    }
}

/// Parses a stored/user-supplied sort name.
pub fn parse_sort_option(value: &str) -> Option<SortOption> {
    match value {
        "newest" => Some(SortOption::Newest),
        "oldest" => Some(SortOption::Oldest),
        "title_az" => Some(SortOption::TitleAz),
        "title_za" => Some(SortOption::TitleZa),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_sort_option, parse_status_filter, sort_option_as_str, status_filter_as_str};
    use super::{SortOption, StatusFilter};

    #[test]
    fn filter_names_round_trip() {
        for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed] {
            assert_eq!(parse_status_filter(status_filter_as_str(filter)), Some(filter));
        }
        assert_eq!(parse_status_filter("done"), None);
    }

    #[test]
    fn sort_names_round_trip() {
        for sort in [
            SortOption::Newest,
            SortOption::Oldest,
            SortOption::TitleAz,
            SortOption::TitleZa,
        ] {
            assert_eq!(parse_sort_option(sort_option_as_str(sort)), Some(sort));
        }
        assert_eq!(parse_sort_option("alphabetical"), None);
    }
}
