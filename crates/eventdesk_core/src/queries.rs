//! Pure derived views over the event list. No side effects, easy to test.

use crate::models::{Event, EventStatus};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Numbers shown on the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_attendees: u64,
}

pub fn metrics(events: &[Event]) -> DashboardMetrics {
    DashboardMetrics {
        total_events: events.len(),
        upcoming_events: events.iter().filter(|e| e.is_upcoming()).count(),
        total_attendees: events.iter().map(|e| u64::from(e.attendees)).sum(),
    }
}

/// The `limit` soonest upcoming events, ascending by date. Ties keep
/// insertion order.
pub fn next_upcoming(events: &[Event], limit: usize) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events.iter().filter(|e| e.is_upcoming()).cloned().collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.truncate(limit);
    upcoming
}

/// Events on the given calendar day, ignoring time of day.
pub fn events_on(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events.iter().filter(|e| e.date.date() == day).cloned().collect()
}

/// Days of the month that carry at least one event.
pub fn event_dates_in_month(events: &[Event], year: i32, month: u32) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .map(|e| e.date.date())
        .filter(|d| d.year() == year && d.month() == month)
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    /// Tab order on the events screen.
    pub const TABS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(EventStatus::Upcoming),
        StatusFilter::Only(EventStatus::Ongoing),
        StatusFilter::Only(EventStatus::Completed),
        StatusFilter::Only(EventStatus::Cancelled),
    ];

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => event.status == *status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn empty_message(&self) -> String {
        match self {
            StatusFilter::All => "You don't have any events yet".to_string(),
            StatusFilter::Only(status) => format!("You don't have any {} events", status.as_str()),
        }
    }
}

pub fn filter_by_status(events: &[Event], filter: StatusFilter) -> Vec<Event> {
    events.iter().filter(|e| filter.matches(e)).cloned().collect()
}
