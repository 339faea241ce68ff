//! Page-level state: which city and date are shown, and the schedule for them.
//!
//! City changes are the only thing that starts a new fetch after the initial
//! load; clock ticks never do.

use crate::calendar::ViewDate;
use crate::config::{ApiSchema, AppConfig};
use crate::fetcher::FetchError;
use crate::schedule::{PrayerDay, Schedule, ScheduleRequest};
use crate::search::SearchCity;
use crate::sync::{FetchTicket, ScheduleState, SyncOutcome};

/// A fetch the caller should now run and hand back to [`PageState::finish_fetch`]
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFetch {
    pub ticket: FetchTicket,
    pub request: ScheduleRequest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    date: ViewDate,
    city: SearchCity,
    schema: ApiSchema,
    schedule: ScheduleState,
}

impl PageState {
    pub fn new(config: &AppConfig, date: ViewDate) -> Self {
        Self {
            date,
            city: SearchCity::parse(&config.default_city).unwrap_or_default(),
            schema: config.schema.clone(),
            schedule: ScheduleState::new(),
        }
    }

    pub fn date(&self) -> ViewDate {
        self.date
    }

    pub fn city(&self) -> &SearchCity {
        &self.city
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.schedule
    }

    /// Today's entry, if loaded
    pub fn entry(&self) -> Option<&PrayerDay> {
        self.schedule.entry_for(self.date.naive())
    }

    /// Fetch for the current city and date (initial load)
    pub fn start_fetch(&mut self) -> PendingFetch {
        let request =
            ScheduleRequest::for_view(&self.schema, self.city.as_str(), self.date.naive());
        PendingFetch {
            ticket: self.schedule.begin(),
            request,
        }
    }

    /// Switch to `city`. Returns the fetch to run, or `None` if it is already shown.
    pub fn submit_search(&mut self, city: SearchCity) -> Option<PendingFetch> {
        if city == self.city {
            return None;
        }
        tracing::info!("City changed: {} -> {}", self.city, city);
        self.city = city;
        Some(self.start_fetch())
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Schedule, FetchError>,
    ) -> SyncOutcome {
        let outcome = self.schedule.complete(ticket, result);
        if outcome == SyncOutcome::Applied {
            tracing::info!("Prayer schedule loaded for {}", self.city);
        }
        outcome
    }
}
