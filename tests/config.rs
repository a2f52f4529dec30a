use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;
use todostate::{Config, Entry, IdGenerator, IdStrategy, MatchPolicy, TodoError};

#[test]
fn empty_toml_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn defaults_match_historical_behavior() {
    let config = Config::default();
    assert_eq!(config.storage_key, "todos");
    assert_eq!(config.delete_match, MatchPolicy::Substring);
    assert_eq!(config.id_strategy, IdStrategy::Uuid);
    assert!(!config.log_file);
}

#[test]
fn toml_fields_parse() {
    let config = Config::from_toml_str(
        r#"
        data_dir = "/tmp/todostate-test"
        storage_key = "home"
        delete_match = "exact"
        id_strategy = "sequential"
        trace_level = "debug"
        log_file = true
        "#,
    )
    .unwrap();

    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/todostate-test")));
    assert_eq!(config.storage_key, "home");
    assert_eq!(config.delete_match, MatchPolicy::Exact);
    assert_eq!(config.id_strategy, IdStrategy::Sequential);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert!(config.log_file);
    assert_eq!(
        config.storage_path(),
        PathBuf::from("/tmp/todostate-test/storage.json")
    );
}

#[test]
fn bad_toml_value_is_config_error() {
    let result = Config::from_toml_str(r#"delete_match = "prefix""#);
    assert!(matches!(result, Err(TodoError::Config(_))));
}

#[test]
fn config_file_is_read_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "id_strategy = \"timestamp\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.id_strategy, IdStrategy::Timestamp);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(TodoError::Io(_))));
}

#[test]
fn map_values_fall_back_on_garbage() {
    let mut map = BTreeMap::new();
    map.insert("delete_match".to_string(), "fuzzy".to_string());
    map.insert("id_strategy".to_string(), "SEQUENTIAL".to_string());
    map.insert("log_file".to_string(), "maybe".to_string());
    map.insert("trace_level".to_string(), "  ".to_string());

    let config = Config::from_map(&map);
    assert_eq!(config.delete_match, MatchPolicy::Substring);
    assert_eq!(config.id_strategy, IdStrategy::Sequential);
    assert!(!config.log_file);
    assert!(config.trace_level.is_none());
}

#[test]
fn sequential_generator_is_seeded_past_existing_ids() {
    let config = Config {
        id_strategy: IdStrategy::Sequential,
        ..Config::default()
    };
    let existing = vec![
        Entry::new("todo-3", "a"),
        Entry::new("todo-12", "b"),
        Entry::new("todo-77-1700000000000", "legacy"),
    ];

    let ids = config.id_generator(&existing);
    assert_eq!(ids.next_id(), "todo-13");
    assert_eq!(ids.next_id(), "todo-14");

    assert_eq!(config.id_generator(&[]).next_id(), "todo-1");
}
