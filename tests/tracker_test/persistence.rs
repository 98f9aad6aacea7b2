//! State survives reopening on each backend

use habitquest::config::StorageBackend;
use habitquest::store::{JsonFileStore, KeyValueStore};
use habitquest::Difficulty;

use crate::common::TestData;

fn assert_roundtrip(backend: StorageBackend) {
    let data = TestData::new(backend);

    {
        let mut tracker = data.open();
        tracker.add_habit("Meditate", Difficulty::Medium).unwrap();
        tracker.add_habit("Lift", Difficulty::Hard).unwrap();
        tracker.toggle_habit(1).unwrap();
    }

    let tracker = data.open();
    assert_eq!(tracker.habits().len(), 2);
    assert_eq!(tracker.habits()[0].name, "Meditate");
    assert!(!tracker.habits()[0].completed);
    assert_eq!(tracker.habits()[1].streak, 1);
    assert!(tracker.habits()[1].completed);

    // Hard at streak 1, not all done: 30 * 1.05 = 31.5 -> 32
    assert_eq!(tracker.progress().points, 32);
    assert_eq!(tracker.progress().coins, 3);
    assert_eq!(tracker.progress().level, 1);
    assert_eq!(tracker.progress().badges, vec!["First Hard Habit"]);
}

#[test]
fn test_json_roundtrip() {
    assert_roundtrip(StorageBackend::Json);
}

#[test]
fn test_sqlite_roundtrip() {
    assert_roundtrip(StorageBackend::Sqlite);
}

#[test]
fn test_json_file_layout() {
    let data = TestData::new(StorageBackend::Json);
    {
        let mut tracker = data.open();
        tracker.add_habit("Read", Difficulty::Easy).unwrap();
        tracker.toggle_habit(0).unwrap();
    }

    let store = JsonFileStore::open(&data.path()).unwrap();
    assert_eq!(store.get("points").unwrap().as_deref(), Some("13"));
    assert_eq!(store.get("coins").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("level").unwrap().as_deref(), Some("1"));
    assert_eq!(
        store.get("badges").unwrap().as_deref(),
        Some(r#"["All Habits Completed"]"#)
    );

    let raw = std::fs::read_to_string(data.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(parsed["habits"].is_string());
}

#[test]
fn test_hand_edited_data_defaults() {
    let data = TestData::new(StorageBackend::Json);
    std::fs::write(
        data.path(),
        r#"{"points":"abc","coins":"12","level":"","habits":"[{\"name\":\"Run\",\"difficulty\":\"Hard\",\"streak\":3,\"completed\":false}]","badges":"nope"}"#,
    )
    .unwrap();

    let tracker = data.open();
    assert_eq!(tracker.progress().points, 0);
    assert_eq!(tracker.progress().coins, 12);
    assert_eq!(tracker.progress().level, 1);
    assert!(tracker.progress().badges.is_empty());
    assert_eq!(tracker.habits().len(), 1);
    assert_eq!(tracker.habits()[0].streak, 3);
}
