use dioxus::prelude::*;

#[component]
pub fn Quote() -> Element {
    rsx! {
        blockquote { class: "quote",
            p { class: "quote-text",
                "Jagalah Sholatmu, karena ketika kau kehilangannya, kamu akan kehilangan yang lainnya"
            }
            p { class: "quote-author", "~ Umar bin Khattab ~" }
        }
    }
}
