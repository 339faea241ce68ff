//! Layout component wrapping the page with the stylesheet, nav and footer.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::config::GIT_SHA;
use crate::search::SearchCity;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Called with the city submitted from the nav search box
    pub on_search: EventHandler<SearchCity>,
    /// Page content
    pub children: Element,
}

/// Main layout component.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Jadwal Sholat", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/style.css")
        }

        Nav { on_search: props.on_search }
        main { class: "container",
            {props.children}
        }
        footer { class: "container footer",
            small {
                "Built with Rust and Dioxus. Data from jadwalsholat.org. v{version} ({GIT_SHA})"
            }
        }
    }
}
