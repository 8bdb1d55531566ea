use dioxus::prelude::*;
use eventdesk_core::{EventCategory, EventStatus};
use crate::theme::AppColors;

#[component]
pub fn StatusBadge(status: EventStatus) -> Element {
    let bg = AppColors::status(status);
    rsx! {
        span {
            style: "background: {bg}; color: white; border-radius: 9999px; padding: 2px 10px; font-size: 0.75rem; font-weight: 600;",
            "{status}"
        }
    }
}

#[component]
pub fn CategoryBadge(category: EventCategory) -> Element {
    rsx! {
        span {
            style: "background: {AppColors::EVENT}; color: white; border-radius: 9999px; padding: 2px 10px; font-size: 0.75rem; font-weight: 600;",
            "{category}"
        }
    }
}
