use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Conference,
    Workshop,
    Meetup,
    Webinar,
    #[default]
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Conference,
        EventCategory::Workshop,
        EventCategory::Meetup,
        EventCategory::Webinar,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Conference => "conference",
            EventCategory::Workshop => "workshop",
            EventCategory::Meetup => "meetup",
            EventCategory::Webinar => "webinar",
            EventCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Conference => "Conference",
            EventCategory::Workshop => "Workshop",
            EventCategory::Meetup => "Meetup",
            EventCategory::Webinar => "Webinar",
            EventCategory::Other => "Other",
        }
    }
}

impl FromStr for EventCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conference" => Ok(EventCategory::Conference),
            "workshop" => Ok(EventCategory::Workshop),
            "meetup" => Ok(EventCategory::Meetup),
            "webinar" => Ok(EventCategory::Webinar),
            "other" => Ok(EventCategory::Other),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
