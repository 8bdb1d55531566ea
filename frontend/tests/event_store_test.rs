//! Store glue tests: opening with/without a snapshot and flushing after
//! mutations (no Dioxus runtime needed).

use chrono::NaiveDate;
use eventdesk_core::{EventCategory, EventId, EventPatch, EventStatus, EventStore, NewEvent};
use eventdesk_frontend::config::AppConfig;
use eventdesk_frontend::event_store;
use pretty_assertions::assert_eq;

fn new_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: "Quarterly planning".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 2).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        location: "HQ".to_string(),
        organizer: "Ops".to_string(),
        attendees: 12,
        status: EventStatus::Upcoming,
        category: EventCategory::Other,
    }
}

#[test]
fn open_without_data_file_is_seeded() {
    let store = event_store::open(&mut AppConfig::default());
    assert_eq!(store, EventStore::seeded());
}

#[test]
fn mutations_are_flushed_and_reopened() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig {
        data_file: Some(dir.path().join("events.json")),
        ..AppConfig::default()
    };
    let mut store = event_store::open(&mut config);
    let file = config.data_file.as_deref();

    let created = event_store::add_event(&mut store, file, new_event("Planning"));
    event_store::update_event(&mut store, file, &created.id, EventPatch::status(EventStatus::Ongoing)).unwrap();
    event_store::delete_event(&mut store, file, &EventId::parse("1").unwrap()).unwrap();

    let reopened = event_store::open(&mut config.clone());
    assert_eq!(reopened, store);
    assert_eq!(reopened.len(), 5);
    assert_eq!(reopened.get(&created.id).unwrap().status, EventStatus::Ongoing);
}

#[test]
fn failed_delete_leaves_store_and_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let mut store = EventStore::seeded();

    let err = event_store::delete_event(&mut store, Some(&path), &EventId::parse("nope").unwrap()).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.len(), 5);
    assert!(!path.exists());
}

#[test]
fn unreadable_snapshot_falls_back_to_seed_and_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let original = r#"[{"id":"1","title":"Board meeting","description":"","date":"2025-06-15T00:00:00","location":"HQ","organizer":"Ops","attendees":8,"status":"upcomming","category":"meetup"}]"#;
    std::fs::write(&path, original).unwrap();
    let mut config = AppConfig {
        data_file: Some(path.clone()),
        ..AppConfig::default()
    };

    let mut store = event_store::open(&mut config);
    assert_eq!(store, EventStore::seeded());
    assert_eq!(config.data_file.as_deref(), Some(path.as_path()));

    event_store::add_event(&mut store, config.data_file.as_deref(), new_event("Planning"));

    let backup = dir.path().join("events.json.corrupt-1");
    assert_eq!(std::fs::read_to_string(&backup).unwrap(), original);
    let saved = event_store::open(&mut config.clone());
    assert_eq!(saved, store);
}
