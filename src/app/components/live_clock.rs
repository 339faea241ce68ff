//! Header clock, refreshed once per second while mounted.

use chrono::Local;
use dioxus::prelude::*;

use crate::clock::{format_clock, ClockTicker};

#[component]
pub fn LiveClock() -> Element {
    let mut now = use_signal(Local::now);

    // The future (and its timer) is dropped with this component
    use_future(move || async move {
        ClockTicker::new().run(move |t| now.set(t)).await;
    });

    let text = format_clock(&*now.read());

    rsx! {
        span { class: "clock", "{text}" }
    }
}
