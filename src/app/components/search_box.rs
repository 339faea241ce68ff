//! City search input.

use dioxus::prelude::*;

use crate::search::{CitySearch, SearchCity};

/// Text input plus search button. Submits on Enter or click; blank input is ignored
/// and the typed text is never cleared.
#[component]
pub fn SearchBox(on_search: EventHandler<SearchCity>) -> Element {
    let mut search = use_signal(CitySearch::new);
    let draft = search.read().draft().to_string();

    rsx! {
        div { class: "search",
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Cari kota...",
                "aria-label": "City",
                value: "{draft}",
                oninput: move |e| search.write().set_draft(e.value()),
                onkeydown: move |e| {
                    let submitted = search.read().on_key(&e.key().to_string());
                    if let Some(city) = submitted {
                        on_search.call(city);
                    }
                },
            }
            button {
                class: "btn",
                "aria-label": "Search",
                onclick: move |_| {
                    let submitted = search.read().submit();
                    if let Some(city) = submitted {
                        on_search.call(city);
                    }
                },
                "Cari"
            }
        }
    }
}
