//! Derived views: metrics, soonest upcoming, day match, status filter.

use chrono::NaiveDate;
use eventdesk_core::queries::{self, DashboardMetrics, StatusFilter};
use eventdesk_core::{EventPatch, EventStatus, EventStore, EventId};
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mixed_store() -> EventStore {
    let mut store = EventStore::seeded();
    store.update(&EventId::parse("2").unwrap(), EventPatch::status(EventStatus::Ongoing)).unwrap();
    store.update(&EventId::parse("5").unwrap(), EventPatch::status(EventStatus::Cancelled)).unwrap();
    store
}

#[test]
fn metrics_for_seed() {
    let store = EventStore::seeded();
    assert_eq!(
        queries::metrics(store.list()),
        DashboardMetrics {
            total_events: 5,
            upcoming_events: 5,
            total_attendees: 975,
        }
    );
}

#[test]
fn metrics_for_empty_list() {
    assert_eq!(queries::metrics(&[]), DashboardMetrics::default());
}

#[test]
fn next_upcoming_sorted_and_truncated() {
    let store = EventStore::seeded();
    let next = queries::next_upcoming(store.list(), 3);
    let titles: Vec<&str> = next.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Product Design Webinar", "Tech Conference 2025", "Web Development Workshop"]
    );
    assert!(next.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn next_upcoming_skips_other_statuses() {
    let store = mixed_store();
    let next = queries::next_upcoming(store.list(), 10);
    assert_eq!(next.len(), 3);
    assert!(next.iter().all(|e| e.status == EventStatus::Upcoming));
}

#[test]
fn next_upcoming_ties_keep_insertion_order() {
    let mut store = EventStore::seeded();
    let date = store.get(&EventId::parse("4").unwrap()).unwrap().date;
    store
        .update(&EventId::parse("1").unwrap(), EventPatch { date: Some(date), ..Default::default() })
        .unwrap();
    let next = queries::next_upcoming(store.list(), 2);
    let ids: Vec<&str> = next.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn events_on_ignores_time_of_day() {
    let mut store = EventStore::seeded();
    let evening = day(2025, 6, 15).and_hms_opt(19, 30, 0).unwrap();
    store
        .update(&EventId::parse("3").unwrap(), EventPatch { date: Some(evening), ..Default::default() })
        .unwrap();

    let on_day = queries::events_on(store.list(), day(2025, 6, 15));
    let ids: Vec<&str> = on_day.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    assert!(queries::events_on(store.list(), day(2025, 6, 16)).is_empty());
}

#[test]
fn event_dates_in_month_collects_days() {
    let store = EventStore::seeded();
    let june: Vec<NaiveDate> = queries::event_dates_in_month(store.list(), 2025, 6).into_iter().collect();
    assert_eq!(june, vec![day(2025, 6, 10), day(2025, 6, 15), day(2025, 6, 25)]);
    assert!(queries::event_dates_in_month(store.list(), 2024, 6).is_empty());
}

#[test]
fn status_filter_and_complement_partition_the_set() {
    let store = mixed_store();
    for status in EventStatus::ALL {
        let matching = queries::filter_by_status(store.list(), StatusFilter::Only(status));
        assert!(matching.iter().all(|e| e.status == status));
        let rest = store.list().iter().filter(|e| e.status != status);

        let mut union: Vec<String> = matching.iter().chain(rest).map(|e| e.id.to_string()).collect();
        union.sort();
        let mut all: Vec<String> = store.list().iter().map(|e| e.id.to_string()).collect();
        all.sort();
        assert_eq!(union, all);
    }
    assert_eq!(queries::filter_by_status(store.list(), StatusFilter::All), store.list().to_vec());
}

#[test]
fn empty_messages() {
    assert_eq!(StatusFilter::All.empty_message(), "You don't have any events yet");
    assert_eq!(
        StatusFilter::Only(EventStatus::Completed).empty_message(),
        "You don't have any completed events"
    );
    let labels: Vec<&str> = StatusFilter::TABS.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["All", "Upcoming", "Ongoing", "Completed", "Cancelled"]);
}
