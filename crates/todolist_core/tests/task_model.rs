use todolist_core::{Task, TaskId};
use uuid::Uuid;

fn sample_task(title: &str, created_at: i64) -> Task {
    Task::new(title, None, false, created_at).expect("sample title must be valid")
}

#[test]
fn new_task_sets_defaults_and_trims_title() {
    let task = Task::new("  Buy milk  ", Some(" 2 liters "), false, 1_000).unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.notes.as_deref(), Some("2 liters"));
    assert!(!task.is_done);
    assert_eq!(task.created_at, 1_000);
    assert_eq!(task.updated_at, 1_000);
}

#[test]
fn new_task_rejects_blank_title() {
    assert_eq!(Task::new("", None, false, 1_000), None);
    assert_eq!(Task::new("   ", Some("notes"), true, 1_000), None);
}

#[test]
fn blank_notes_normalize_to_absent() {
    let task = Task::new("Call dentist", Some("   "), false, 1_000).unwrap();
    assert_eq!(task.notes, None);

    let task = Task::new("Call dentist", None, false, 1_000).unwrap();
    assert_eq!(task.notes, None);
}

#[test]
fn rejected_update_leaves_task_fully_unchanged() {
    let mut task = Task::new("Original", Some("keep me"), false, 1_000).unwrap();
    let before = task.clone();

    assert!(!task.apply_update("   ", Some("replacement"), true, 2_000));
    assert_eq!(task, before);
}

#[test]
fn accepted_update_overwrites_all_fields_and_touches_timestamp() {
    let mut task = Task::new("Original", Some("old"), false, 1_000).unwrap();

    assert!(task.apply_update(" New title ", None, true, 2_000));
    assert_eq!(task.title, "New title");
    assert_eq!(task.notes, None);
    assert!(task.is_done);
    assert_eq!(task.created_at, 1_000);
    assert_eq!(task.updated_at, 2_000);
}

#[test]
fn toggle_twice_restores_flag_and_strictly_increases_updated_at() {
    let mut task = sample_task("Water plants", 1_000);
    let initial_done = task.is_done;
    let t0 = task.updated_at;

    task.toggle_done(2_000);
    assert_eq!(task.is_done, !initial_done);
    let t1 = task.updated_at;
    assert!(t1 > t0);

    task.toggle_done(2_000);
    assert_eq!(task.is_done, initial_done);
    assert!(task.updated_at > t1);
}

#[test]
fn same_millisecond_mutations_keep_updated_at_strictly_monotonic() {
    let mut task = sample_task("Rapid edits", 5_000);

    task.toggle_done(5_000);
    assert_eq!(task.updated_at, 5_001);
    assert!(task.apply_update("Rapid edits", None, false, 5_000));
    assert_eq!(task.updated_at, 5_002);
    assert!(task.updated_at >= task.created_at);
}

#[test]
fn task_serialization_round_trips() {
    let id: TaskId = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task {
        id,
        title: "Ship release".to_string(),
        notes: Some("tag v0.1.0".to_string()),
        is_done: true,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Ship release");
    assert_eq!(json["is_done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
