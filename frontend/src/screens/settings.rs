use dioxus::prelude::*;
use eventdesk_core::settings::{CalendarViewMode, SettingsSection};
use crate::app::use_settings;
use crate::theme::AppColors;
use crate::widgets::{Card, Page};
use tracing::info;

#[component]
pub fn SettingsScreen(is_dark: bool) -> Element {
    let mut settings = use_settings();
    let mut section = use_signal(SettingsSection::default);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut items_per_page = use_signal(|| settings.read().appearance.items_per_page.to_string());

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let border = AppColors::border(is_dark);
    let input_style = format!(
        "width: 100%; padding: 8px 12px; border-radius: 6px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        border, on_surface
    );

    let current = section();
    let s = settings();

    let save = move |ev: FormEvent| {
        ev.prevent_default();
        error.set(None);
        if current == SettingsSection::Appearance {
            let raw = items_per_page();
            if let Err(e) = settings.write().appearance.set_items_per_page(&raw) {
                notice.set(None);
                error.set(Some(e.to_string()));
                return;
            }
        }
        info!(section = current.label(), "settings saved");
        notice.set(Some(current.saved_message().to_string()));
    };

    rsx! {
        Page { is_dark, title: "Settings", subtitle: "Manage your event system settings",
            div { style: "display: inline-flex; gap: 4px; padding: 4px; border-radius: 8px; background: {border}; align-self: flex-start;",
                for sec in SettingsSection::ALL {
                    button {
                        key: "{sec.label()}",
                        onclick: move |_| {
                            section.set(sec);
                            notice.set(None);
                            error.set(None);
                        },
                        style: "padding: 6px 12px; border-radius: 6px; border: none; cursor: pointer; color: {on_surface}; background: {tab_background(is_dark, sec == current)};",
                        "{sec.label()}"
                    }
                }
            }
            if let Some(msg) = notice() {
                div { style: "padding: 12px 16px; border-radius: 6px; background: {AppColors::SUCCESS}; color: white;", "{msg}" }
            }
            Card { is_dark,
                form { onsubmit: save, style: "display: flex; flex-direction: column; gap: 16px;",
                    {match current {
                        SettingsSection::Account => rsx! {
                            SectionHeader { is_dark, title: "Account Settings", description: "Manage your account information and preferences" }
                            LabeledInput { label: "Name",
                                input {
                                    value: "{s.account.name}",
                                    oninput: move |ev| settings.write().account.name = ev.value(),
                                    style: "{input_style}",
                                }
                            }
                            LabeledInput { label: "Email",
                                input {
                                    r#type: "email",
                                    value: "{s.account.email}",
                                    oninput: move |ev| settings.write().account.email = ev.value(),
                                    style: "{input_style}",
                                }
                            }
                            LabeledInput { label: "Timezone",
                                input {
                                    value: "{s.account.timezone}",
                                    oninput: move |ev| settings.write().account.timezone = ev.value(),
                                    style: "{input_style}",
                                }
                            }
                            Toggle {
                                is_dark,
                                label: "Sync with Calendar",
                                description: "Allow the system to sync events with your external calendar",
                                checked: s.account.calendar_sync,
                                on_toggle: move |on| settings.write().account.calendar_sync = on,
                            }
                        },
                        SettingsSection::Notifications => rsx! {
                            SectionHeader { is_dark, title: "Notification Settings", description: "Configure how and when you receive notifications" }
                            Toggle {
                                is_dark,
                                label: "Enable Notifications",
                                description: "Receive notifications about event updates and changes",
                                checked: s.notifications.enabled,
                                on_toggle: move |on| settings.write().notifications.enabled = on,
                            }
                            p { style: "margin: 0; font-size: 0.875rem; font-weight: 500;", "Notification Types" }
                            Toggle {
                                is_dark,
                                label: "New events",
                                checked: s.notifications.new_events,
                                on_toggle: move |on| settings.write().notifications.new_events = on,
                            }
                            Toggle {
                                is_dark,
                                label: "Event updates",
                                checked: s.notifications.event_updates,
                                on_toggle: move |on| settings.write().notifications.event_updates = on,
                            }
                            Toggle {
                                is_dark,
                                label: "Event reminders",
                                checked: s.notifications.event_reminders,
                                on_toggle: move |on| settings.write().notifications.event_reminders = on,
                            }
                        },
                        SettingsSection::Appearance => rsx! {
                            SectionHeader { is_dark, title: "Appearance Settings", description: "Customize the look and feel of your event management system" }
                            Toggle {
                                is_dark,
                                label: "Dark Mode",
                                description: "Enable dark mode for the application interface",
                                checked: s.appearance.dark_mode,
                                on_toggle: move |on| settings.write().appearance.dark_mode = on,
                            }
                            LabeledInput { label: "Default Calendar View",
                                div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px;",
                                    for mode in CalendarViewMode::ALL {
                                        button {
                                            key: "{mode.label()}",
                                            r#type: "button",
                                            onclick: move |_| settings.write().appearance.default_calendar_view = mode,
                                            style: "padding: 8px; border-radius: 6px; border: 1px solid {border}; cursor: pointer; color: {on_surface}; background: {tab_background(is_dark, mode == s.appearance.default_calendar_view)};",
                                            "{mode.label()}"
                                        }
                                    }
                                }
                            }
                            LabeledInput { label: "Items Per Page",
                                input {
                                    r#type: "number",
                                    min: "1",
                                    value: "{items_per_page}",
                                    oninput: move |ev| items_per_page.set(ev.value()),
                                    style: "{input_style}",
                                }
                            }
                        },
                    }}
                    if let Some(msg) = error() {
                        p { style: "margin: 0; color: {AppColors::DESTRUCTIVE}; font-size: 0.875rem;", "{msg}" }
                    }
                    div {
                        button {
                            r#type: "submit",
                            style: "padding: 8px 16px; border-radius: 6px; border: none; background: {AppColors::EVENT}; color: white; font-weight: 600; cursor: pointer;",
                            "{save_label(current)}"
                        }
                    }
                }
            }
            p { style: "margin: 0; font-size: 0.75rem; color: {muted};", "Settings apply to this session only." }
        }
    }
}

fn save_label(section: SettingsSection) -> &'static str {
    match section {
        SettingsSection::Account => "Save Account Settings",
        SettingsSection::Notifications => "Save Notification Settings",
        SettingsSection::Appearance => "Save Appearance Settings",
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
fn SectionHeader(is_dark: bool, title: String, description: String) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        div {
            h2 { style: "font-size: 1.25rem; font-weight: 600; margin: 0;", "{title}" }
            p { style: "margin: 4px 0 0; font-size: 0.875rem; color: {muted};", "{description}" }
        }
    }
}

#[component]
fn LabeledInput(label: String, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 6px;",
            label { style: "font-size: 0.875rem; font-weight: 500;", "{label}" }
            {children}
        }
    }
}

#[component]
fn Toggle(
    is_dark: bool,
    label: String,
    #[props(default)] description: String,
    checked: bool,
    on_toggle: EventHandler<bool>,
) -> Element {
    let muted = AppColors::muted(is_dark);
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 4px;",
            label { style: "display: flex; align-items: center; gap: 8px; font-size: 0.875rem; font-weight: 500; cursor: pointer;",
                "{label}"
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |ev| on_toggle.call(ev.checked()),
                }
            }
            if !description.is_empty() {
                p { style: "margin: 0; font-size: 0.875rem; color: {muted};", "{description}" }
            }
        }
    }
}
