use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Screen body with heading and subtitle.
#[component]
pub fn Page(is_dark: bool, title: String, subtitle: String, children: Element) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: {spacing::LG};",
            div {
                h1 { style: "font-size: 1.875rem; font-weight: 700; margin: 0; color: {on_surface};", "{title}" }
                p { style: "margin: {spacing::XS} 0 0; color: {muted};", "{subtitle}" }
            }
            {children}
        }
    }
}
