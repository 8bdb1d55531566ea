use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(is_dark: bool, children: Element) -> Element {
    let surface = AppColors::surface(is_dark);
    let border = AppColors::border(is_dark);
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 12px; padding: {spacing::CARD_PADDING};",
            {children}
        }
    }
}
