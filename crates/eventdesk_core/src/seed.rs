//! Sample events every fresh store starts from.

use crate::ids::EventId;
use crate::models::{Event, EventCategory, EventStatus};
use chrono::NaiveDate;

struct Sample {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
    location: &'static str,
    organizer: &'static str,
    attendees: u32,
    category: EventCategory,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        id: "1",
        title: "Tech Conference 2025",
        description: "Annual technology conference featuring the latest innovations",
        date: (2025, 6, 15),
        location: "San Francisco Convention Center",
        organizer: "Tech Events Inc.",
        attendees: 500,
        category: EventCategory::Conference,
    },
    Sample {
        id: "2",
        title: "Web Development Workshop",
        description: "Hands-on workshop for modern web development techniques",
        date: (2025, 6, 25),
        location: "Online",
        organizer: "Code Masters",
        attendees: 50,
        category: EventCategory::Workshop,
    },
    Sample {
        id: "3",
        title: "AI Meetup Group",
        description: "Monthly meetup to discuss advancements in artificial intelligence",
        date: (2025, 7, 5),
        location: "Tech Hub Downtown",
        organizer: "AI Enthusiasts",
        attendees: 75,
        category: EventCategory::Meetup,
    },
    Sample {
        id: "4",
        title: "Product Design Webinar",
        description: "Learn about the latest trends in product design",
        date: (2025, 6, 10),
        location: "Online",
        organizer: "Design Innovation Group",
        attendees: 200,
        category: EventCategory::Webinar,
    },
    Sample {
        id: "5",
        title: "Startup Pitch Night",
        description: "Entrepreneurs pitch their startups to potential investors",
        date: (2025, 7, 12),
        location: "Innovation Center",
        organizer: "Venture Capital Partners",
        attendees: 150,
        category: EventCategory::Other,
    },
];

impl Sample {
    fn to_event(&self) -> Event {
        let (y, m, d) = self.date;
        Event {
            id: EventId::parse(self.id).expect("sample id is not blank"),
            title: self.title.to_string(),
            description: self.description.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("sample date is a real calendar day"),
            location: self.location.to_string(),
            organizer: self.organizer.to_string(),
            attendees: self.attendees,
            status: EventStatus::Upcoming,
            category: self.category,
        }
    }
}

pub fn sample_events() -> Vec<Event> {
    SAMPLES.iter().map(Sample::to_event).collect()
}
