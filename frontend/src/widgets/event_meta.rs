use dioxus::prelude::*;
use eventdesk_core::calendar::format_long_date;
use eventdesk_core::Event;
use crate::theme::AppColors;

/// Date / location / attendee line under an event title.
#[component]
pub fn EventMeta(is_dark: bool, event: Event, #[props(default = true)] show_date: bool) -> Element {
    let muted = AppColors::muted(is_dark);
    let date = format_long_date(event.date.date());
    rsx! {
        div { style: "margin-top: 12px; display: flex; flex-wrap: wrap; gap: 16px; font-size: 0.875rem; color: {muted};",
            if show_date {
                span { "📅 {date}" }
            }
            span { "📍 {event.location}" }
            span { "👥 {event.attendees} attendees" }
        }
    }
}
