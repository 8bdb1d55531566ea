//! Form boundary: defaults, prefill, validation of each field.

use chrono::NaiveDate;
use eventdesk_core::form::{EventDraft, FormField};
use eventdesk_core::{EventCategory, EventId, EventPatch, EventStatus, EventStore};
use pretty_assertions::assert_eq;

fn filled() -> EventDraft {
    EventDraft {
        title: "  Rust Workshop ".to_string(),
        description: "Ownership and borrowing".to_string(),
        date: "2025-09-03".to_string(),
        location: "Room 4".to_string(),
        organizer: "Ferris".to_string(),
        attendees: "42".to_string(),
        status: EventStatus::Ongoing,
        category: EventCategory::Workshop,
    }
}

#[test]
fn default_draft_matches_blank_form() {
    let d = EventDraft::default();
    assert_eq!(d.attendees, "0");
    assert_eq!(d.status, EventStatus::Upcoming);
    assert_eq!(d.category, EventCategory::Other);
    assert!(d.title.is_empty());
}

#[test]
fn valid_draft_builds_trimmed_event_at_midnight() {
    let new = filled().validate().expect("valid");
    assert_eq!(new.title, "Rust Workshop");
    assert_eq!(
        new.date,
        NaiveDate::from_ymd_opt(2025, 9, 3).unwrap().and_hms_opt(0, 0, 0).unwrap()
    );
    assert_eq!(new.attendees, 42);
    assert_eq!(new.status, EventStatus::Ongoing);
    assert_eq!(new.category, EventCategory::Workshop);
}

#[test]
fn blank_required_field_is_rejected() {
    let mut d = filled();
    d.organizer = "   ".to_string();
    let err = d.validate().unwrap_err();
    assert_eq!(err.field, FormField::Organizer);
}

#[test]
fn first_failing_field_is_reported() {
    let mut d = filled();
    d.title.clear();
    d.attendees = "lots".to_string();
    assert_eq!(d.validate().unwrap_err().field, FormField::Title);
}

#[test]
fn malformed_date_is_rejected() {
    let mut d = filled();
    d.date = "03/09/2025".to_string();
    assert_eq!(d.validate().unwrap_err().field, FormField::Date);
    d.date = "2025-02-30".to_string();
    assert_eq!(d.validate().unwrap_err().field, FormField::Date);
}

#[test]
fn non_numeric_or_negative_attendees_are_rejected() {
    for bad in ["abc", "-5", "4.5", ""] {
        let mut d = filled();
        d.attendees = bad.to_string();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field, FormField::Attendees, "input {:?}", bad);
    }
}

#[test]
fn edit_prefill_round_trips_through_update() {
    let mut store = EventStore::seeded();
    let id = EventId::parse("4").unwrap();
    let original = store.get(&id).unwrap().clone();

    let mut draft = EventDraft::from_event(&original);
    assert_eq!(draft.date, "2025-06-10");
    assert_eq!(draft.attendees, "200");

    draft.attendees = "250".to_string();
    let new = draft.validate().unwrap();
    let updated = store.update(&id, EventPatch::from(new)).unwrap().clone();

    assert_eq!(updated.attendees, 250);
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.date, original.date);
    assert_eq!(updated.id, original.id);
}

#[test]
fn validation_error_display_names_the_field() {
    let mut d = filled();
    d.attendees = "x".to_string();
    let msg = d.validate().unwrap_err().to_string();
    assert!(msg.starts_with("Expected Attendees:"), "{}", msg);
}

#[test]
fn add_draft_rejects_without_touching_store() {
    let mut store = EventStore::seeded();
    let mut d = filled();
    d.attendees = "NaN".to_string();

    let err = store.add_draft(&d).unwrap_err();
    assert!(matches!(err, eventdesk_core::StoreError::Invalid(ref v) if v.field == FormField::Attendees));
    assert_eq!(store.len(), 5);

    let created = store.add_draft(&filled()).unwrap();
    assert_eq!(store.len(), 6);
    assert_eq!(created.attendees, 42);
}
