use dioxus::prelude::*;
use eventdesk_core::form::EventDraft;
use eventdesk_core::queries::{self, StatusFilter};
use eventdesk_core::{Event, EventId, EventPatch};
use crate::app::{use_config, use_store};
use crate::event_store;
use crate::screens::EventForm;
use crate::theme::AppColors;
use crate::widgets::{Card, EventMeta, Page, StatusBadge};
use tracing::warn;

#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Closed,
    Adding,
    Editing(EventId),
}

#[component]
pub fn EventsScreen(is_dark: bool) -> Element {
    let mut store = use_store();
    let data_file = use_config().data_file;
    let mut tab = use_signal(StatusFilter::default);
    let mut mode = use_signal(|| FormMode::Closed);
    let mut pending_delete = use_signal(|| Option::<Event>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let border = AppColors::border(is_dark);

    let filter = tab();
    let visible = queries::filter_by_status(store.read().list(), filter);
    let editing = match mode() {
        FormMode::Editing(id) => store.read().get(&id).cloned(),
        _ => None,
    };

    let add_file = data_file.clone();
    let edit_file = data_file.clone();
    let delete_file = data_file;
    let add_key = "add";

    rsx! {
        Page { is_dark, title: "Events", subtitle: "Manage your events",
            div { style: "display: flex; justify-content: flex-end;",
                button {
                    onclick: move |_| mode.set(FormMode::Adding),
                    style: "padding: 8px 16px; border-radius: 6px; border: none; background: {AppColors::EVENT}; color: white; font-weight: 600; cursor: pointer;",
                    "+ Add Event"
                }
            }
            if mode() == FormMode::Adding {
                EventForm {
                    key: "{add_key}",
                    is_dark,
                    heading: "Add New Event",
                    initial: EventDraft::default(),
                    on_submit: move |new| {
                        event_store::add_event(&mut store.write(), add_file.as_deref(), new);
                        mode.set(FormMode::Closed);
                    },
                    on_cancel: move |_| mode.set(FormMode::Closed),
                }
            }
            if let Some(event) = editing {
                EventForm {
                    key: "edit-{event.id}",
                    is_dark,
                    heading: "Edit Event",
                    initial: EventDraft::from_event(&event),
                    on_submit: move |new| {
                        if let FormMode::Editing(id) = mode() {
                            let patch = EventPatch::from(new);
                            if let Err(e) = event_store::update_event(&mut store.write(), edit_file.as_deref(), &id, patch) {
                                warn!(error = %e, "edit dropped");
                            }
                        }
                        mode.set(FormMode::Closed);
                    },
                    on_cancel: move |_| mode.set(FormMode::Closed),
                }
            }
            if let Some(target) = pending_delete() {
                Card { is_dark,
                    p { style: "margin: 0 0 4px; font-weight: 600;", "Are you sure you want to delete this event?" }
                    p { style: "margin: 0 0 16px; color: {muted};", "\"{target.title}\" will be removed permanently." }
                    div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                        button {
                            onclick: move |_| pending_delete.set(None),
                            style: "padding: 8px 16px; border-radius: 6px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                            "Cancel"
                        }
                        button {
                            onclick: move |_| {
                                if let Some(target) = pending_delete() {
                                    if let Err(e) = event_store::delete_event(&mut store.write(), delete_file.as_deref(), &target.id) {
                                        warn!(error = %e, "delete dropped");
                                    }
                                    if mode() == FormMode::Editing(target.id) {
                                        mode.set(FormMode::Closed);
                                    }
                                }
                                pending_delete.set(None);
                            },
                            style: "padding: 8px 16px; border-radius: 6px; border: none; background: {AppColors::DESTRUCTIVE}; color: white; cursor: pointer;",
                            "Delete"
                        }
                    }
                }
            }
            div { style: "display: inline-flex; gap: 4px; padding: 4px; border-radius: 8px; background: {border}; align-self: flex-start;",
                for t in StatusFilter::TABS {
                    button {
                        key: "{t.label()}",
                        onclick: move |_| tab.set(t),
                        style: "padding: 6px 12px; border-radius: 6px; border: none; cursor: pointer; color: {on_surface}; background: {tab_background(is_dark, t == filter)};",
                        "{t.label()}"
                    }
                }
            }
            div { style: "display: flex; flex-direction: column; gap: 24px;",
                for event in visible.iter().cloned() {
                    EventCard {
                        key: "{event.id}",
                        is_dark,
                        event,
                        on_edit: move |id| mode.set(FormMode::Editing(id)),
                        on_delete: move |e| pending_delete.set(Some(e)),
                    }
                }
                if visible.is_empty() {
                    div { style: "text-align: center; padding: 40px 0;",
                        h3 { style: "font-size: 1.125rem; font-weight: 500; margin: 0;", "No events found" }
                        p { style: "margin: 4px 0 0; color: {muted};", "{filter.empty_message()}" }
                    }
                }
            }
        }
    }
}

fn tab_background(is_dark: bool, active: bool) -> &'static str {
    if active {
        AppColors::surface(is_dark)
    } else {
        "transparent"
    }
}

#[component]
fn EventCard(
    is_dark: bool,
    event: Event,
    on_edit: EventHandler<EventId>,
    on_delete: EventHandler<Event>,
) -> Element {
    let muted = AppColors::muted(is_dark);
    let border = AppColors::border(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let edit_id = event.id.clone();
    let to_delete = event.clone();

    rsx! {
        Card { is_dark,
            div { style: "display: flex; justify-content: space-between;",
                div {
                    h3 { style: "font-size: 1.125rem; font-weight: 600; margin: 0;", "{event.title}" }
                    p { style: "margin: 4px 0 0; font-size: 0.875rem; color: {muted};", "{event.description}" }
                    EventMeta { is_dark, event: event.clone() }
                }
                div { style: "display: flex; flex-direction: column; align-items: flex-end; gap: 8px;",
                    div { style: "display: flex; gap: 8px;",
                        button {
                            title: "Edit",
                            onclick: move |_| on_edit.call(edit_id.clone()),
                            style: "padding: 6px 10px; border-radius: 6px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                            "✎"
                        }
                        button {
                            title: "Delete",
                            onclick: move |_| on_delete.call(to_delete.clone()),
                            style: "padding: 6px 10px; border-radius: 6px; border: none; background: {AppColors::DESTRUCTIVE}; color: white; cursor: pointer;",
                            "🗑"
                        }
                    }
                    StatusBadge { status: event.status }
                }
            }
        }
    }
}
