use todolist_core::{visible_tasks, Pager, PagerState, Task, VisibleQuery, PAGE_SIZE};

fn snapshot(count: usize) -> Vec<Task> {
    // Newest first, matching the repository's list ordering.
    (0..count)
        .map(|i| {
            let created_at = 1_000_000 - (i as i64) * 3_600_000;
            Task::new(&format!("Task {}", i + 1), None, false, created_at).expect("valid title")
        })
        .collect()
}

#[test]
fn twenty_tasks_show_fifteen_then_all_after_one_advance() {
    let tasks = snapshot(20);
    let visible = visible_tasks(&tasks, &VisibleQuery::default());
    let mut pager = Pager::new();
    pager.sync(visible.len());

    let page = pager.page(&visible);
    assert_eq!(page.len(), PAGE_SIZE);
    // Default sort is newest first; the page is the 15 most recent.
    assert_eq!(page[0].title, "Task 1");
    assert_eq!(page[14].title, "Task 15");
    for pair in page.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    assert!(pager.advance(visible.len()));
    pager.settle();
    assert_eq!(pager.page(&visible).len(), 20);
    assert!(!pager.has_more(visible.len()));
}

#[test]
fn short_sequence_shows_everything_without_pagination() {
    let tasks = snapshot(4);
    let visible = visible_tasks(&tasks, &VisibleQuery::default());
    let mut pager = Pager::new();
    pager.sync(visible.len());

    assert_eq!(pager.items_to_show(), 4);
    assert_eq!(pager.page(&visible).len(), 4);
    assert!(!pager.has_more(visible.len()));
    assert!(!pager.advance(visible.len()));
}

#[test]
fn empty_sequence_has_empty_page_and_no_affordance() {
    let visible = visible_tasks(&[], &VisibleQuery::default());
    let mut pager = Pager::new();
    pager.sync(visible.len());

    assert_eq!(pager.items_to_show(), 0);
    assert!(pager.page(&visible).is_empty());
    assert!(!pager.has_more(0));
    assert!(!pager.advance(0));
    assert_eq!(pager.state(), PagerState::Idle);
}

#[test]
fn cursor_invariant_holds_for_arbitrary_event_sequences() {
    let lens = [0usize, 3, 17, 45, 45, 12, 0, 60, 60, 60, 29];
    let mut pager = Pager::new();

    for (step, &len) in lens.iter().enumerate() {
        pager.sync(len);
        assert!(pager.items_to_show() <= len, "cursor exceeded length at step {step}");

        match step % 3 {
            0 => {
                pager.advance(len);
            }
            1 => {
                pager.settle();
                pager.advance(len);
            }
            _ => pager.reset(),
        }

        pager.sync(len);
        assert!(pager.items_to_show() <= len, "cursor exceeded length at step {step}");
    }
}

#[test]
fn reset_after_query_change_returns_to_first_page() {
    let tasks = snapshot(40);
    let visible = visible_tasks(&tasks, &VisibleQuery::default());
    let mut pager = Pager::new();
    pager.sync(visible.len());

    pager.advance(visible.len());
    pager.settle();
    assert_eq!(pager.items_to_show(), 2 * PAGE_SIZE);

    // Filter/search/sort changed: the derived sequence is a new one.
    pager.reset();
    pager.sync(visible.len());
    assert_eq!(pager.page(&visible).len(), PAGE_SIZE);
}

#[test]
fn deletions_below_cursor_clamp_the_page() {
    let tasks = snapshot(35);
    let visible = visible_tasks(&tasks, &VisibleQuery::default());
    let mut pager = Pager::new();
    pager.sync(visible.len());
    pager.advance(visible.len());
    pager.settle();
    pager.advance(visible.len());
    pager.settle();
    assert_eq!(pager.items_to_show(), 35);

    // Most of the list is deleted out from under the cursor.
    let shrunk = snapshot(6);
    let visible = visible_tasks(&shrunk, &VisibleQuery::default());
    pager.sync(visible.len());
    assert_eq!(pager.items_to_show(), 6);
    assert_eq!(pager.page(&visible).len(), 6);
}

#[test]
fn advance_while_loading_is_ignored_until_settled() {
    let mut pager = Pager::new();

    assert!(pager.advance(100));
    assert!(pager.is_loading());
    assert!(!pager.advance(100));
    assert!(!pager.advance(100));
    assert_eq!(pager.items_to_show(), 2 * PAGE_SIZE);

    pager.settle();
    assert!(pager.advance(100));
    assert_eq!(pager.items_to_show(), 3 * PAGE_SIZE);
}
