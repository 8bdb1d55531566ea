use dioxus::prelude::*;
use eventdesk_core::queries;
use crate::app::{use_config, use_store};
use crate::theme::AppColors;
use crate::widgets::{Card, CategoryBadge, EventMeta, Page};

#[component]
pub fn DashboardScreen(is_dark: bool) -> Element {
    let store = use_store();
    let config = use_config();
    let muted = AppColors::muted(is_dark);

    let (metrics, next_events) = {
        let store = store.read();
        (
            queries::metrics(store.list()),
            queries::next_upcoming(store.list(), config.upcoming_limit),
        )
    };

    rsx! {
        Page { is_dark, title: "Dashboard", subtitle: "Overview of your event management system",
            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px;",
                MetricCard { is_dark, label: "Total Events", value: "{metrics.total_events}", hint: "Events in your system" }
                MetricCard { is_dark, label: "Upcoming Events", value: "{metrics.upcoming_events}", hint: "Events planned in the future" }
                MetricCard { is_dark, label: "Total Attendees", value: "{metrics.total_attendees}", hint: "People attending all events" }
            }
            div {
                h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px;", "Upcoming Events" }
                div { style: "display: flex; flex-direction: column; gap: 16px;",
                    if next_events.is_empty() {
                        Card { is_dark,
                            p { style: "margin: 0; color: {muted};", "No upcoming events." }
                        }
                    }
                    for event in next_events.iter().cloned() {
                        Card { key: "{event.id}", is_dark,
                            div { style: "display: flex; justify-content: space-between; align-items: flex-start;",
                                div {
                                    h3 { style: "font-size: 1.125rem; font-weight: 600; margin: 0;", "{event.title}" }
                                    p { style: "margin: 4px 0 0; font-size: 0.875rem; color: {muted};", "{event.description}" }
                                    EventMeta { is_dark, event: event.clone() }
                                }
                                CategoryBadge { category: event.category }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(is_dark: bool, label: String, value: String, hint: String) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        Card { is_dark,
            p { style: "margin: 0 0 8px; font-size: 0.875rem; font-weight: 500; color: {muted};", "{label}" }
            div { style: "font-size: 1.875rem; font-weight: 700;", "{value}" }
            p { style: "margin: 4px 0 0; font-size: 0.75rem; color: {muted};", "{hint}" }
        }
    }
}
