use dioxus::prelude::*;
use crate::app::Route;
use crate::theme::{spacing, AppColors};

#[component]
pub fn SideNav(active: Route, on_navigate: EventHandler<Route>) -> Element {
    rsx! {
        nav {
            style: "position: fixed; top: 0; bottom: 0; left: 0; width: {spacing::SIDEBAR_WIDTH}; background: {AppColors::SIDEBAR}; color: {AppColors::SIDEBAR_TEXT}; display: flex; flex-direction: column;",
            div { style: "padding: {spacing::MD}; border-bottom: 1px solid {AppColors::SIDEBAR_ACCENT};",
                h1 { style: "font-size: 1.25rem; font-weight: 700; margin: 0;", "Event Management System" }
            }
            ul { style: "list-style: none; margin: 0; padding: {spacing::MD} {spacing::SM}; flex: 1; display: flex; flex-direction: column; gap: {spacing::XS};",
                for route in Route::ALL {
                    li { key: "{route.label()}",
                        button {
                            onclick: move |_| on_navigate.call(route),
                            style: "width: 100%; text-align: left; padding: 8px 12px; border: none; border-radius: 6px; cursor: pointer; color: inherit; font-size: 1rem; background: {nav_background(route == active)};",
                            "{route.icon()}  {route.label()}"
                        }
                    }
                }
            }
            div { style: "padding: {spacing::MD}; border-top: 1px solid {AppColors::SIDEBAR_ACCENT}; display: flex; align-items: center; gap: 12px;",
                div { style: "height: 32px; width: 32px; border-radius: 9999px; background: {AppColors::SIDEBAR_ACCENT}; display: flex; align-items: center; justify-content: center; font-size: 0.875rem; font-weight: 500;",
                    "EM"
                }
                div {
                    div { style: "font-weight: 500;", "Event Manager" }
                    div { style: "font-size: 0.75rem; opacity: 0.7;", "Admin" }
                }
            }
        }
    }
}

fn nav_background(active: bool) -> &'static str {
    if active {
        AppColors::SIDEBAR_ACCENT
    } else {
        "transparent"
    }
}
