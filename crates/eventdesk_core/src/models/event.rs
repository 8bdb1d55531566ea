use super::{EventCategory, EventStatus};
use crate::ids::EventId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub organizer: String,
    pub attendees: u32,
    pub status: EventStatus,
    pub category: EventCategory,
}

/// Everything an event carries except its id. Built by the form boundary
/// or directly by callers that already hold typed values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub organizer: String,
    pub attendees: u32,
    pub status: EventStatus,
    pub category: EventCategory,
}

/// Partial update. `None` leaves the stored field as it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub attendees: Option<u32>,
    pub status: Option<EventStatus>,
    pub category: Option<EventCategory>,
}

impl Event {
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Event {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            location: new.location,
            organizer: new.organizer,
            attendees: new.attendees,
            status: new.status,
            category: new.category,
        }
    }

    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.organizer {
            self.organizer = v;
        }
        if let Some(v) = patch.attendees {
            self.attendees = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
    }

    pub fn is_upcoming(&self) -> bool {
        self.status == EventStatus::Upcoming
    }
}

impl From<NewEvent> for EventPatch {
    fn from(new: NewEvent) -> Self {
        EventPatch {
            title: Some(new.title),
            description: Some(new.description),
            date: Some(new.date),
            location: Some(new.location),
            organizer: Some(new.organizer),
            attendees: Some(new.attendees),
            status: Some(new.status),
            category: Some(new.category),
        }
    }
}

impl EventPatch {
    pub fn status(status: EventStatus) -> Self {
        EventPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }
}
