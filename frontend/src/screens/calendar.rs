use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use eventdesk_core::calendar::{self, format_long_date, MonthCursor, WEEKDAY_HEADERS};
use eventdesk_core::queries;
use eventdesk_core::Event;
use crate::app::use_store;
use crate::theme::AppColors;
use crate::widgets::{Card, EventMeta, Page, StatusBadge};

#[component]
pub fn CalendarScreen(is_dark: bool) -> Element {
    let store = use_store();
    let mut selected = use_signal(|| chrono::Local::now().date_naive());
    let mut cursor = use_signal(|| MonthCursor::containing(selected()));
    let mut detail = use_signal(|| Option::<Event>::None);

    let muted = AppColors::muted(is_dark);
    let border = AppColors::border(is_dark);

    let month = cursor();
    let day = selected();
    let weeks = calendar::month_grid(month);
    let (marked, day_events) = {
        let store = store.read();
        (
            queries::event_dates_in_month(store.list(), month.year, month.month),
            queries::events_on(store.list(), day),
        )
    };
    let heading = format_long_date(day);

    rsx! {
        Page { is_dark, title: "Calendar", subtitle: "View your events in a calendar",
            div { style: "display: grid; grid-template-columns: 1fr 2fr; gap: 24px; align-items: start;",
                Card { is_dark,
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                        button {
                            onclick: move |_| cursor.set(month.prev()),
                            style: "border: 1px solid {border}; background: transparent; color: inherit; border-radius: 6px; cursor: pointer; padding: 4px 10px;",
                            "‹"
                        }
                        span { style: "font-weight: 600;", "{month.title()}" }
                        button {
                            onclick: move |_| cursor.set(month.next()),
                            style: "border: 1px solid {border}; background: transparent; color: inherit; border-radius: 6px; cursor: pointer; padding: 4px 10px;",
                            "›"
                        }
                    }
                    table { style: "width: 100%; border-collapse: collapse; text-align: center;",
                        thead {
                            tr {
                                for wd in WEEKDAY_HEADERS {
                                    th { key: "{wd}", style: "font-size: 0.75rem; font-weight: 500; color: {muted}; padding: 4px 0;", "{wd}" }
                                }
                            }
                        }
                        tbody {
                            for (row , week) in weeks.into_iter().enumerate() {
                                tr { key: "{row}",
                                    for (col , cell) in week.into_iter().enumerate() {
                                        td { key: "{col}", style: "padding: 2px;",
                                            if let Some(date) = cell {
                                                DayCell {
                                                    date,
                                                    selected: date == day,
                                                    has_events: marked.contains(&date),
                                                    on_select: move |d| selected.set(d),
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Card { is_dark,
                    h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0 0 16px;", "Events for {heading}" }
                    div { style: "display: flex; flex-direction: column; gap: 16px;",
                        for event in day_events.iter().cloned() {
                            DayEventRow {
                                key: "{event.id}",
                                is_dark,
                                event,
                                on_open: move |e| detail.set(Some(e)),
                            }
                        }
                        if day_events.is_empty() {
                            div { style: "text-align: center; padding: 40px 0;",
                                h3 { style: "font-size: 1.125rem; font-weight: 500; margin: 0;", "No events for this day" }
                                p { style: "margin: 4px 0 0; font-size: 0.875rem; color: {muted};", "Select another day or add new events" }
                            }
                        }
                    }
                }
            }
            if let Some(event) = detail() {
                EventDetail { is_dark, event, on_close: move |_| detail.set(None) }
            }
        }
    }
}

#[component]
fn DayCell(date: NaiveDate, selected: bool, has_events: bool, on_select: EventHandler<NaiveDate>) -> Element {
    let bg = if selected { AppColors::EVENT } else { "transparent" };
    let fg = if selected { "white" } else { "inherit" };
    let dot = if has_events && !selected { AppColors::EVENT } else if has_events { "white" } else { "transparent" };
    rsx! {
        button {
            onclick: move |_| on_select.call(date),
            style: "position: relative; height: 36px; width: 36px; border: none; border-radius: 6px; cursor: pointer; background: {bg}; color: {fg};",
            "{date.day()}"
            span { style: "position: absolute; bottom: 3px; left: 50%; transform: translateX(-50%); height: 6px; width: 6px; border-radius: 9999px; background: {dot};" }
        }
    }
}

#[component]
fn DayEventRow(is_dark: bool, event: Event, on_open: EventHandler<Event>) -> Element {
    let border = AppColors::border(is_dark);
    let muted = AppColors::muted(is_dark);
    let opened = event.clone();
    rsx! {
        div {
            onclick: move |_| on_open.call(opened.clone()),
            style: "border: 1px solid {border}; border-radius: 6px; padding: 16px; cursor: pointer;",
            div { style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    h3 { style: "font-weight: 500; margin: 0;", "{event.title}" }
                    p { style: "margin: 4px 0 0; font-size: 0.875rem; color: {muted};", "{event.description}" }
                    EventMeta { is_dark, event: event.clone(), show_date: false }
                }
                StatusBadge { status: event.status }
            }
        }
    }
}

#[component]
fn EventDetail(is_dark: bool, event: Event, on_close: EventHandler<()>) -> Element {
    let muted = AppColors::muted(is_dark);
    let date = format_long_date(event.date.date());
    rsx! {
        Card { is_dark,
            div { style: "display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0;", "{event.title}" }
                    p { style: "margin: 4px 0 0; color: {muted};", "{event.description}" }
                }
                button {
                    onclick: move |_| on_close.call(()),
                    style: "border: none; background: transparent; color: inherit; font-size: 1.25rem; cursor: pointer;",
                    "×"
                }
            }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; padding-top: 16px;",
                DetailItem { is_dark, label: "Date", value: "{date}" }
                DetailItem { is_dark, label: "Status", value: "{event.status.label()}" }
                DetailItem { is_dark, label: "Location", value: "{event.location}" }
                DetailItem { is_dark, label: "Category", value: "{event.category.label()}" }
                DetailItem { is_dark, label: "Organizer", value: "{event.organizer}" }
                DetailItem { is_dark, label: "Attendees", value: "{event.attendees}" }
            }
        }
    }
}

#[component]
fn DetailItem(is_dark: bool, label: String, value: String) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        div {
            p { style: "margin: 0; font-size: 0.875rem; font-weight: 500;", "{label}" }
            p { style: "margin: 0; font-size: 0.875rem; color: {muted};", "{value}" }
        }
    }
}
