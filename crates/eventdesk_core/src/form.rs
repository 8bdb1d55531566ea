//! Text-level event form state and the validation boundary that turns it
//! into a typed `NewEvent`. Malformed input never reaches the store.

use crate::error::ValidationError;
use crate::models::{Event, EventCategory, EventStatus, NewEvent};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Date,
    Location,
    Organizer,
    Attendees,
    ItemsPerPage,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Event Title",
            FormField::Description => "Description",
            FormField::Date => "Date",
            FormField::Location => "Location",
            FormField::Organizer => "Organizer",
            FormField::Attendees => "Expected Attendees",
            FormField::ItemsPerPage => "Items Per Page",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub location: String,
    pub organizer: String,
    pub attendees: String,
    pub status: EventStatus,
    pub category: EventCategory,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            location: String::new(),
            organizer: String::new(),
            attendees: "0".to_string(),
            status: EventStatus::Upcoming,
            category: EventCategory::Other,
        }
    }
}

impl EventDraft {
    /// Prefill for the edit form.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.date().format(DATE_FORMAT).to_string(),
            location: event.location.clone(),
            organizer: event.organizer.clone(),
            attendees: event.attendees.to_string(),
            status: event.status,
            category: event.category,
        }
    }

    pub fn validate(&self) -> Result<NewEvent, ValidationError> {
        let title = required(FormField::Title, &self.title)?;
        let description = required(FormField::Description, &self.description)?;
        let date = parse_date(&self.date)?;
        let location = required(FormField::Location, &self.location)?;
        let organizer = required(FormField::Organizer, &self.organizer)?;
        let attendees = parse_attendees(&self.attendees)?;
        Ok(NewEvent {
            title,
            description,
            date,
            location,
            organizer,
            attendees,
            status: self.status,
            category: self.category,
        })
    }
}

fn required(field: FormField, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn parse_date(value: &str) -> Result<chrono::NaiveDateTime, ValidationError> {
    let raw = required(FormField::Date, value)?;
    let date = NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| ValidationError::new(FormField::Date, format!("expected YYYY-MM-DD ({})", e)))?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| ValidationError::new(FormField::Date, "out of range"))
}

fn parse_attendees(value: &str) -> Result<u32, ValidationError> {
    let raw = required(FormField::Attendees, value)?;
    raw.parse::<u32>().map_err(|_| {
        ValidationError::new(FormField::Attendees, "must be a whole number of 0 or more")
    })
}
