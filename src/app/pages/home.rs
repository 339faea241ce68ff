//! Home page: city header with clock, prayer times and quote.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::{Layout, LiveClock, PrayerTimes, Quote};
use crate::app::use_app_context;
use crate::calendar::ViewDate;
use crate::fetcher::{HttpScheduleFetcher, ScheduleSource};
use crate::page::{PageState, PendingFetch};
use crate::search::SearchCity;

/// Run one fetch and hand the result back to the page state
async fn load_schedule(
    fetcher: Rc<HttpScheduleFetcher>,
    mut page: Signal<PageState>,
    pending: PendingFetch,
) {
    let result = fetcher.fetch(&pending.request).await;
    page.write().finish_fetch(pending.ticket, result);
}

#[component]
pub fn Home() -> Element {
    let ctx = use_app_context();
    let mut page = use_signal(|| PageState::new(&ctx.config, ViewDate::today()));

    // Initial load, once per mount
    let fetcher = ctx.fetcher.clone();
    use_hook(move || {
        spawn(async move {
            let pending = page.write().start_fetch();
            load_schedule(fetcher, page, pending).await;
        })
    });

    let fetcher = ctx.fetcher.clone();
    let on_search = move |city: SearchCity| {
        let pending = page.write().submit_search(city);
        if let Some(pending) = pending {
            spawn(load_schedule(fetcher.clone(), page, pending));
        }
    };

    let (city, date, entry, show_dhuha, loading) = {
        let state = page.read();
        (
            state.city().to_string(),
            state.date().label(),
            state.entry().cloned(),
            state.schedule().shows_dhuha(),
            state.schedule().is_loading(),
        )
    };

    rsx! {
        Layout {
            title: city.clone(),
            on_search: on_search,

            header { class: "page-header",
                h1 { "{city}, {date}" }
                LiveClock {}
            }

            section { "aria-busy": if loading { "true" } else { "false" },
                PrayerTimes { entry, show_dhuha }
            }

            Quote {}
        }
    }
}
