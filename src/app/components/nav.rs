//! Navigation bar: title, city search, theme toggle and source link.

use dioxus::prelude::*;

use super::search_box::SearchBox;
use super::theme::ThemeToggle;
use crate::search::SearchCity;

const SOURCE_URL: &str = "https://github.com/lakuapik/jadwalsholatorg";

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// Called with a non-blank city when the search is submitted
    pub on_search: EventHandler<SearchCity>,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav { class: "nav",
            strong { class: "brand", "Ayo Sholat!" }
            div { class: "nav-actions",
                SearchBox { on_search: props.on_search }
                ThemeToggle {}
                a {
                    class: "icon-link",
                    href: SOURCE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "Data source on GitHub",
                    "GitHub"
                }
            }
        }
    }
}
