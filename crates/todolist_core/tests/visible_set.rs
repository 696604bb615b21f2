use todolist_core::{visible_tasks, SortOption, StatusFilter, Task, VisibleQuery};

fn task(title: &str, notes: Option<&str>, is_done: bool, created_at: i64) -> Task {
    Task::new(title, notes, is_done, created_at).expect("valid title")
}

fn titles<'a>(visible: &[&'a Task]) -> Vec<&'a str> {
    visible.iter().map(|t| t.title.as_str()).collect()
}

fn query(filter: StatusFilter, search: &str, sort: SortOption) -> VisibleQuery {
    VisibleQuery {
        filter,
        search: search.to_string(),
        sort,
    }
}

#[test]
fn all_filter_passes_everything_through() {
    let tasks = vec![
        task("done", None, true, 1),
        task("open", None, false, 2),
    ];

    let visible = visible_tasks(&tasks, &VisibleQuery::default());
    assert_eq!(visible.len(), 2);
}

#[test]
fn active_and_completed_filters_split_by_done_flag() {
    let tasks = vec![
        task("one", None, false, 1),
        task("two", None, true, 2),
        task("three", None, false, 3),
    ];

    let active = visible_tasks(&tasks, &query(StatusFilter::Active, "", SortOption::Oldest));
    assert_eq!(titles(&active), ["one", "three"]);

    let completed = visible_tasks(&tasks, &query(StatusFilter::Completed, "", SortOption::Oldest));
    assert_eq!(titles(&completed), ["two"]);
}

#[test]
fn search_is_case_insensitive_over_title_and_notes() {
    let tasks = vec![
        task("Buy milk", None, false, 1),
        task("buy bread", None, false, 2),
        task("Laundry", Some("buy detergent"), false, 3),
        task("Unrelated", None, false, 4),
    ];

    let both = visible_tasks(&tasks, &query(StatusFilter::All, "buy", SortOption::Oldest));
    assert_eq!(titles(&both), ["Buy milk", "buy bread", "Laundry"]);

    let milk_only = visible_tasks(&tasks, &query(StatusFilter::All, "MILK", SortOption::Oldest));
    assert_eq!(titles(&milk_only), ["Buy milk"]);
}

#[test]
fn absent_notes_never_match_search() {
    let tasks = vec![task("Quiet task", None, false, 1)];

    let hit = visible_tasks(&tasks, &query(StatusFilter::All, "quiet", SortOption::Newest));
    assert_eq!(hit.len(), 1);

    let miss = visible_tasks(&tasks, &query(StatusFilter::All, "anything", SortOption::Newest));
    assert!(miss.is_empty());
}

#[test]
fn blank_search_passes_through_unchanged() {
    let tasks = vec![
        task("alpha", None, false, 1),
        task("beta", None, false, 2),
    ];

    let visible = visible_tasks(&tasks, &query(StatusFilter::All, "   ", SortOption::Oldest));
    assert_eq!(titles(&visible), ["alpha", "beta"]);
}

#[test]
fn newest_and_oldest_sort_by_created_at() {
    let tasks = vec![
        task("middle", None, false, 2),
        task("newest", None, false, 3),
        task("oldest", None, false, 1),
    ];

    let newest = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::Newest));
    assert_eq!(titles(&newest), ["newest", "middle", "oldest"]);

    let oldest = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::Oldest));
    assert_eq!(titles(&oldest), ["oldest", "middle", "newest"]);
}

#[test]
fn title_sort_is_case_insensitive_both_directions() {
    let tasks = vec![
        task("banana", None, false, 1),
        task("Apple", None, false, 2),
        task("cherry", None, false, 3),
    ];

    let az = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::TitleAz));
    assert_eq!(titles(&az), ["Apple", "banana", "cherry"]);

    let za = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::TitleZa));
    assert_eq!(titles(&za), ["cherry", "banana", "Apple"]);
}

#[test]
fn equal_sort_keys_keep_input_order() {
    let tasks = vec![
        task("first in", None, false, 5),
        task("second in", None, false, 5),
        task("third in", None, false, 5),
    ];

    let newest = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::Newest));
    assert_eq!(titles(&newest), ["first in", "second in", "third in"]);

    let oldest = visible_tasks(&tasks, &query(StatusFilter::All, "", SortOption::Oldest));
    assert_eq!(titles(&oldest), ["first in", "second in", "third in"]);
}

#[test]
fn derivation_is_idempotent_for_identical_inputs() {
    let tasks = vec![
        task("Buy milk", Some("2 liters"), false, 1),
        task("buy bread", None, true, 2),
        task("Laundry", None, false, 3),
    ];
    let q = query(StatusFilter::All, "buy", SortOption::TitleAz);

    let first: Vec<_> = visible_tasks(&tasks, &q).iter().map(|t| t.id).collect();
    let second: Vec<_> = visible_tasks(&tasks, &q).iter().map(|t| t.id).collect();
    assert_eq!(first, second);
}

#[test]
fn empty_snapshot_yields_empty_visible_set() {
    let visible = visible_tasks(&[], &VisibleQuery::default());
    assert!(visible.is_empty());
}

#[test]
fn filters_compose_with_search_and_sort() {
    let tasks = vec![
        task("buy milk", None, false, 1),
        task("buy bread", None, true, 2),
        task("buy eggs", None, false, 3),
        task("sell bike", None, false, 4),
    ];

    let visible = visible_tasks(&tasks, &query(StatusFilter::Active, "buy", SortOption::Newest));
    assert_eq!(titles(&visible), ["buy eggs", "buy milk"]);
}
