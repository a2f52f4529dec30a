use serde_json::json;
use todostate::storage::{MemoryStorage, Storage, TodoSlot};
use todostate::{transform, Action, ActionRecord, Entry, MatchPolicy, TodoError, TodoReducer};

fn reducer() -> TodoReducer<MemoryStorage> {
    TodoReducer::new(TodoSlot::new(MemoryStorage::new()))
}

fn persisted(reducer: &TodoReducer<MemoryStorage>) -> Vec<Entry> {
    let raw = reducer.slot().storage().get_item("todos").unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn sample() -> Vec<Entry> {
    vec![
        Entry::new("todo-1", "a"),
        Entry::new("todo-2", "b"),
        Entry::new("todo-3", "c").with_done(true),
    ]
}

#[test]
fn create_appends_and_persists() {
    let mut reducer = reducer();
    let state = sample();
    let entry = Entry::new("todo-4", "d");

    let next = reducer
        .reduce(Some(state.clone()), &Action::Create(entry.clone()))
        .unwrap();

    let mut expected = state;
    expected.push(entry);
    assert_eq!(next, expected);
    assert_eq!(persisted(&reducer), expected);
}

#[test]
fn create_on_empty_state_holds_single_entry() {
    let mut reducer = reducer();
    let entry = Entry::new("todo-42-1700000000000", "buy milk");

    let next = reducer.reduce(Some(vec![]), &Action::Create(entry.clone())).unwrap();

    assert_eq!(next, vec![entry]);
    let raw = reducer.slot().storage().get_item("todos").unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"id":"todo-42-1700000000000","text":"buy milk","done":false}]"#
    );
}

#[test]
fn update_replaces_entry_in_place() {
    let mut reducer = reducer();
    let replacement = Entry::new("todo-2", "b-done").with_done(true);

    let next = reducer
        .reduce(Some(sample()), &Action::Update(replacement.clone()))
        .unwrap();

    assert_eq!(
        next,
        vec![
            Entry::new("todo-1", "a"),
            replacement,
            Entry::new("todo-3", "c").with_done(true),
        ]
    );
}

#[test]
fn update_single_entry_scenario() {
    let mut reducer = reducer();
    let next = reducer
        .reduce(
            Some(vec![Entry::new("todo-1", "a")]),
            &Action::Update(Entry::new("todo-1", "a-done").with_done(true)),
        )
        .unwrap();

    assert_eq!(next, vec![Entry::new("todo-1", "a-done").with_done(true)]);
}

#[test]
fn update_without_match_leaves_contents_unchanged() {
    let mut reducer = reducer();
    let next = reducer
        .reduce(Some(sample()), &Action::Update(Entry::new("todo-9", "x")))
        .unwrap();

    assert_eq!(next, sample());
    assert_eq!(persisted(&reducer), sample());
}

#[test]
fn update_is_idempotent() {
    let mut reducer = reducer();
    let action = Action::Update(Entry::new("todo-1", "z").with_done(true));

    let first = reducer.reduce(Some(sample()), &action).unwrap();
    let second = reducer.reduce(Some(sample()), &action).unwrap();

    assert_eq!(first, second);
}

#[test]
fn delete_removes_target_and_keeps_order() {
    let mut reducer = reducer();
    let next = reducer
        .reduce(
            Some(vec![Entry::new("todo-1", "a"), Entry::new("todo-2", "b")]),
            &Action::Delete { id: "todo-1".to_string() },
        )
        .unwrap();

    assert_eq!(next, vec![Entry::new("todo-2", "b")]);
}

#[test]
fn delete_substring_policy_removes_every_containing_id() {
    let state = vec![
        Entry::new("todo-1", "a"),
        Entry::new("todo-10", "b"),
        Entry::new("todo-2", "c"),
        Entry::new("todo-21", "d"),
    ];

    let next = transform(
        &state,
        &Action::Delete { id: "todo-1".to_string() },
        MatchPolicy::Substring,
    );

    assert_eq!(next, vec![Entry::new("todo-2", "c"), Entry::new("todo-21", "d")]);
}

#[test]
fn delete_exact_policy_only_removes_equal_id() {
    let state = vec![Entry::new("todo-1", "a"), Entry::new("todo-10", "b")];
    let mut reducer = TodoReducer::with_policy(TodoSlot::new(MemoryStorage::new()), MatchPolicy::Exact);

    let next = reducer
        .reduce(Some(state), &Action::Delete { id: "todo-1".to_string() })
        .unwrap();

    assert_eq!(next, vec![Entry::new("todo-10", "b")]);
}

#[test]
fn delete_without_match_is_noop() {
    let next = transform(
        &sample(),
        &Action::Delete { id: "other".to_string() },
        MatchPolicy::Substring,
    );
    assert_eq!(next, sample());
}

#[test]
fn missing_previous_state_loads_from_slot() {
    let raw = serde_json::to_string(&sample()).unwrap();
    let mut reducer = TodoReducer::new(TodoSlot::new(MemoryStorage::with_item("todos", raw)));

    let next = reducer
        .reduce(None, &Action::Delete { id: "todo-3".to_string() })
        .unwrap();

    assert_eq!(next, vec![Entry::new("todo-1", "a"), Entry::new("todo-2", "b")]);
}

#[test]
fn missing_previous_state_and_empty_slot_starts_empty() {
    let mut reducer = reducer();
    let next = reducer
        .reduce(None, &Action::Create(Entry::new("todo-1", "a")))
        .unwrap();
    assert_eq!(next, vec![Entry::new("todo-1", "a")]);
}

#[test]
fn corrupted_slot_propagates_parse_error() {
    let mut reducer = TodoReducer::new(TodoSlot::new(MemoryStorage::with_item("todos", "[{oops")));

    let result = reducer.reduce(None, &Action::Create(Entry::new("todo-1", "a")));

    assert!(matches!(result, Err(TodoError::Parse(_))));
    let raw = reducer.slot().storage().get_item("todos").unwrap();
    assert_eq!(raw.as_deref(), Some("[{oops"));
}

#[test]
fn explicit_state_ignores_corrupted_slot() {
    let mut reducer = TodoReducer::new(TodoSlot::new(MemoryStorage::with_item("todos", "garbage")));

    let next = reducer
        .reduce(Some(vec![]), &Action::Create(Entry::new("todo-1", "a")))
        .unwrap();

    assert_eq!(next.len(), 1);
    assert_eq!(persisted(&reducer), next);
}

#[test]
fn unrecognized_record_passes_state_through_and_persists() {
    let mut reducer = reducer();
    let record = ActionRecord {
        verb: "ARCHIVE_TODO".to_string(),
        details: json!({"id": "todo-1"}),
    };

    let next = reducer.reduce_record(Some(sample()), &record).unwrap();

    assert_eq!(next, sample());
    assert_eq!(persisted(&reducer), sample());
}

#[test]
fn recognized_record_is_applied() {
    let mut reducer = reducer();
    let record: ActionRecord = serde_json::from_value(json!({
        "type": "CREATE_TODO",
        "details": {"id": "todo-5", "text": "e", "done": false}
    }))
    .unwrap();

    let next = reducer.reduce_record(Some(vec![]), &record).unwrap();

    assert_eq!(next, vec![Entry::new("todo-5", "e")]);
}

#[test]
fn malformed_record_details_are_rejected() {
    let mut reducer = reducer();
    let record = ActionRecord {
        verb: "DELETE_TODO".to_string(),
        details: json!({"ident": "todo-1"}),
    };

    let result = reducer.reduce_record(Some(sample()), &record);

    assert!(matches!(result, Err(TodoError::Action(_))));
    assert!(reducer.slot().storage().get_item("todos").unwrap().is_none());
}

#[test]
fn transform_leaves_input_untouched() {
    let state = sample();
    let _ = transform(&state, &Action::Create(Entry::new("todo-4", "d")), MatchPolicy::Substring);
    assert_eq!(state, sample());
}

#[test]
fn persisted_list_round_trips_through_slot() {
    let mut reducer = reducer();
    reducer.reduce(Some(sample()), &Action::Delete { id: "nothing".into() }).unwrap();
    assert_eq!(reducer.load().unwrap(), sample());
}

#[test]
fn empty_delete_target_under_substring_policy_clears_list() {
    let next = transform(
        &sample(),
        &Action::Delete { id: String::new() },
        MatchPolicy::Substring,
    );
    assert!(next.is_empty());

    let kept = transform(&sample(), &Action::Delete { id: String::new() }, MatchPolicy::Exact);
    assert_eq!(kept, sample());
}
