//! Snapshot file: save/load, missing file falls back to seed, bad json errors.

use eventdesk_core::persistence;
use eventdesk_core::{EventId, EventPatch, EventStatus, EventStore, StoreError};
use pretty_assertions::assert_eq;

#[test]
fn save_then_open_restores_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("events.json");

    let mut store = EventStore::seeded();
    store.delete(&EventId::parse("1").unwrap()).unwrap();
    store
        .update(&EventId::parse("2").unwrap(), EventPatch::status(EventStatus::Completed))
        .unwrap();
    persistence::save(&path, store.list()).unwrap();

    let reopened = persistence::open_or_seed(&path).unwrap();
    assert_eq!(reopened, store);
    assert!(!path.with_file_name("events.json.tmp").exists());
}

#[test]
fn missing_file_opens_seed() {
    let dir = tempfile::tempdir().unwrap();
    let store = persistence::open_or_seed(&dir.path().join("absent.json")).unwrap();
    assert_eq!(store, EventStore::seeded());
}

#[test]
fn snapshot_uses_lowercase_enums() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    persistence::save(&path, EventStore::seeded().list()).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"status\": \"upcoming\""));
    assert!(raw.contains("\"category\": \"webinar\""));
}

#[test]
fn corrupt_snapshot_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, "[{\"id\": 1}]").unwrap();
    let err = persistence::open_or_seed(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn quarantine_moves_file_to_first_free_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(dir.path().join("events.json.corrupt-1"), "older").unwrap();
    std::fs::write(&path, r#"[{"status":"upcomming"}]"#).unwrap();

    let moved = persistence::quarantine(&path).unwrap();

    assert_eq!(moved, dir.path().join("events.json.corrupt-2"));
    assert!(!path.exists());
    assert_eq!(std::fs::read_to_string(&moved).unwrap(), r#"[{"status":"upcomming"}]"#);
    assert_eq!(std::fs::read_to_string(dir.path().join("events.json.corrupt-1")).unwrap(), "older");
}
