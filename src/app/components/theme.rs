//! Light/dark toggle button.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let dark = theme.is_dark();

    rsx! {
        button {
            class: "btn btn-ghost",
            "aria-label": if dark { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: move |_| theme.toggle(),
            if dark { "☀" } else { "☾" }
        }
    }
}
