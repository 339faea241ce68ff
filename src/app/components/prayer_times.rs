//! The six prayer rows.

use dioxus::prelude::*;

use crate::schedule::{PrayerDay, PrayerSlot};

#[component]
pub fn PrayerTimes(
    /// Entry for the shown date, `None` until loaded
    entry: Option<PrayerDay>,
    /// Include the Dhuha row
    #[props(default = true)]
    show_dhuha: bool,
) -> Element {
    let rows = PrayerSlot::ALL
        .into_iter()
        .filter(|slot| show_dhuha || !slot.is_optional())
        .map(|slot| (slot.label(), slot.display(entry.as_ref()).to_string()));

    rsx! {
        ul { class: "prayer-times",
            for (label, time) in rows {
                li { key: "{label}", class: "prayer-row",
                    span { class: "prayer-name", "{label}" }
                    span { class: "prayer-time", "{time}" }
                }
            }
        }
    }
}
