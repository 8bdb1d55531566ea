use dioxus::prelude::*;
use eventdesk_core::form::{EventDraft, FormField};
use eventdesk_core::{EventCategory, EventStatus, NewEvent};
use crate::theme::AppColors;
use crate::widgets::Card;

/// Add/edit form. Holds its own draft; only a validated `NewEvent` leaves it.
/// Cancel drops the draft.
#[component]
pub fn EventForm(
    is_dark: bool,
    heading: String,
    initial: EventDraft,
    on_submit: EventHandler<NewEvent>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let border = AppColors::border(is_dark);
    let input_style = format!(
        "width: 100%; padding: 8px 12px; border-radius: 6px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        border, on_surface
    );
    let d = draft();

    rsx! {
        Card { is_dark,
            h2 { style: "font-size: 1.125rem; font-weight: 600; margin: 0 0 16px;", "{heading}" }
            form {
                onsubmit: move |ev| {
                    ev.prevent_default();
                    let result = draft.read().validate();
                    match result {
                        Ok(new) => {
                            error.set(None);
                            on_submit.call(new);
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                },
                style: "display: flex; flex-direction: column; gap: 16px;",
                Field { label: "{FormField::Title.label()}",
                    input {
                        value: "{d.title}",
                        oninput: move |ev| draft.write().title = ev.value(),
                        style: "{input_style}",
                    }
                }
                Field { label: "{FormField::Description.label()}",
                    input {
                        value: "{d.description}",
                        oninput: move |ev| draft.write().description = ev.value(),
                        style: "{input_style}",
                    }
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field { label: "{FormField::Date.label()}",
                        input {
                            r#type: "date",
                            value: "{d.date}",
                            oninput: move |ev| draft.write().date = ev.value(),
                            style: "{input_style}",
                        }
                    }
                    Field { label: "{FormField::Location.label()}",
                        input {
                            value: "{d.location}",
                            oninput: move |ev| draft.write().location = ev.value(),
                            style: "{input_style}",
                        }
                    }
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field { label: "{FormField::Organizer.label()}",
                        input {
                            value: "{d.organizer}",
                            oninput: move |ev| draft.write().organizer = ev.value(),
                            style: "{input_style}",
                        }
                    }
                    Field { label: "{FormField::Attendees.label()}",
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{d.attendees}",
                            oninput: move |ev| draft.write().attendees = ev.value(),
                            style: "{input_style}",
                        }
                    }
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field { label: "Status",
                        select {
                            value: "{d.status.as_str()}",
                            onchange: move |ev| {
                                if let Ok(status) = ev.value().parse::<EventStatus>() {
                                    draft.write().status = status;
                                }
                            },
                            style: "{input_style}",
                            for status in EventStatus::ALL {
                                option { value: "{status.as_str()}", selected: status == d.status, "{status.label()}" }
                            }
                        }
                    }
                    Field { label: "Category",
                        select {
                            value: "{d.category.as_str()}",
                            onchange: move |ev| {
                                if let Ok(category) = ev.value().parse::<EventCategory>() {
                                    draft.write().category = category;
                                }
                            },
                            style: "{input_style}",
                            for category in EventCategory::ALL {
                                option { value: "{category.as_str()}", selected: category == d.category, "{category.label()}" }
                            }
                        }
                    }
                }
                if let Some(msg) = error() {
                    p { style: "margin: 0; color: {AppColors::DESTRUCTIVE}; font-size: 0.875rem;", "{msg}" }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px; padding-top: 8px;",
                    button {
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        style: "padding: 8px 16px; border-radius: 6px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        style: "padding: 8px 16px; border-radius: 6px; border: none; background: {AppColors::EVENT}; color: white; font-weight: 600; cursor: pointer;",
                        "Save Event"
                    }
                }
            }
        }
    }
}

#[component]
fn Field(label: String, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 6px;",
            label { style: "font-size: 0.875rem; font-weight: 500;", "{label}" }
            {children}
        }
    }
}
