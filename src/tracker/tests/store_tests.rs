//! Tests for the JSON file and in-memory dataset stores.

use super::support::SteppingClock;
use crate::tracker::{
    adapters::{json_file::JsonFileStore, memory::InMemoryDatasetStore},
    domain::{Dataset, ProjectName, TaskDescription, TaskStatus},
    ports::{DatasetStore, StoreError},
};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

struct FileFixture {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn file() -> FileFixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("tasks.json")).expect("utf-8 temp path");
    FileFixture { _dir: dir, path }
}

fn populated() -> Dataset {
    let clock = SteppingClock::new();
    let mut dataset = Dataset::new();
    let home = dataset
        .add_project(ProjectName::new("Home").expect("valid name"))
        .expect("add project")
        .id();
    dataset
        .add_task(
            home,
            TaskDescription::new("Buy milk").expect("valid description"),
            &clock,
        )
        .expect("add task");
    let chore = dataset
        .add_task(
            home,
            TaskDescription::new("Clean gutters").expect("valid description"),
            &clock,
        )
        .expect("add task");
    if let Some(task) = dataset.task_mut(chore.id()) {
        task.set_status(TaskStatus::InProgress, &clock);
    }
    dataset
}

#[rstest]
fn ensure_initialized_creates_empty_document(file: FileFixture) {
    let store = JsonFileStore::open(&file.path).expect("open store");

    store.ensure_initialized().expect("initialise store");

    let contents = fs::read_to_string(&file.path).expect("read store file");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("valid JSON");
    assert_eq!(value, serde_json::json!({ "projects": [], "tasks": [] }));
    assert_eq!(store.load().expect("load store"), Dataset::new());
}

#[rstest]
fn ensure_initialized_leaves_existing_content_untouched(file: FileFixture) {
    fs::write(&file.path, "not json at all").expect("seed file");
    let store = JsonFileStore::open(&file.path).expect("open store");

    store.ensure_initialized().expect("initialise store");

    let contents = fs::read_to_string(&file.path).expect("read store file");
    assert_eq!(contents, "not json at all");
}

#[rstest]
fn load_reports_corrupt_content(file: FileFixture) {
    fs::write(&file.path, "{\"projects\": [").expect("seed file");
    let store = JsonFileStore::open(&file.path).expect("open store");

    let result = store.load();

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));
}

#[rstest]
#[case(r#"{"projects": []}"#)]
#[case(r#"{"projects": [], "tasks": [{"id": 1}]}"#)]
#[case(r#"{"projects": [{"id": 1, "name": ""}], "tasks": []}"#)]
#[case(r#"{"projects": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}], "tasks": []}"#)]
#[case(r#"[1, 2, 3]"#)]
fn load_rejects_malformed_datasets(file: FileFixture, #[case] contents: &str) {
    fs::write(&file.path, contents).expect("seed file");
    let store = JsonFileStore::open(&file.path).expect("open store");

    let err = store.load().expect_err("malformed dataset must not load");

    assert!(err.is_corrupt(), "expected corrupt error, got {err:?}");
}

#[rstest]
fn load_reports_missing_file_as_io_error(file: FileFixture) {
    let store = JsonFileStore::open(&file.path).expect("open store");

    assert!(matches!(store.load(), Err(StoreError::Io { .. })));
}

#[rstest]
fn save_then_load_round_trips(file: FileFixture) {
    let store = JsonFileStore::open(&file.path).expect("open store");
    let dataset = populated();

    store.save(&dataset).expect("save dataset");
    let loaded = store.load().expect("load dataset");
    store.save(&loaded).expect("save reloaded dataset");
    let reloaded = store.load().expect("load again");

    assert_eq!(loaded, dataset);
    assert_eq!(reloaded, dataset);
}

#[rstest]
fn save_writes_four_space_indented_json_and_no_temp_files(file: FileFixture) {
    let store = JsonFileStore::open(&file.path).expect("open store");

    store.save(&populated()).expect("save dataset");

    let contents = fs::read_to_string(&file.path).expect("read store file");
    assert!(contents.starts_with("{\n    \"projects\": ["));
    assert!(contents.contains("\"projectId\": 1"));
    assert!(contents.contains("\"status\": \"in-progress\""));
    let parent = file.path.parent().expect("store has a parent directory");
    let leftovers: Vec<_> = fs::read_dir(parent)
        .expect("list temp dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name() != "tasks.json")
        .collect();
    assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
}

#[rstest]
fn open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let nested = dir.path().join("nested").join("deeper").join("tasks.json");
    let path = Utf8PathBuf::from_path_buf(nested).expect("utf-8 temp path");

    let store = JsonFileStore::open(&path).expect("open store");
    store.ensure_initialized().expect("initialise store");

    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[rstest]
fn in_memory_store_requires_initialisation() {
    let store = InMemoryDatasetStore::new();

    assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    store.ensure_initialized().expect("initialise store");
    assert_eq!(store.load().expect("load store"), Dataset::new());
}

#[rstest]
fn in_memory_store_counts_saves_and_shares_state() {
    let store = InMemoryDatasetStore::new();
    let clone = store.clone();
    let dataset = populated();

    clone.save(&dataset).expect("save dataset");

    assert_eq!(store.save_count().expect("count saves"), 1);
    assert_eq!(store.snapshot().expect("snapshot"), Some(dataset));
}

#[rstest]
fn in_memory_corruption_is_reported_until_overwritten() {
    let store = InMemoryDatasetStore::corrupted("truncated write");
    store.ensure_initialized().expect("initialise store");

    assert!(store.load().is_err_and(|err| err.is_corrupt()));

    store.save(&Dataset::new()).expect("save dataset");
    assert_eq!(store.load().expect("load store"), Dataset::new());
}
