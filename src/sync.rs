//! Displayed schedule and the fetch cycles that replace it.
//!
//! Each fetch takes a [`FetchTicket`] before it starts. Only the ticket of the
//! most recent fetch may replace the schedule, so a slow response for a city
//! the user already searched away from is dropped. A failed fetch leaves the
//! last good schedule in place.

use chrono::NaiveDate;

use crate::fetcher::FetchError;
use crate::schedule::{PrayerDay, Schedule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Applied,
    Failed(FetchError),
    /// A newer fetch started after this one; its result was discarded
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleState {
    schedule: Option<Schedule>,
    latest: u64,
    pending: bool,
}

impl ScheduleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch cycle; any earlier in-flight cycle becomes stale
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.pending = true;
        FetchTicket {
            generation: self.latest,
        }
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Schedule, FetchError>,
    ) -> SyncOutcome {
        if ticket.generation != self.latest {
            tracing::debug!(
                "Discarding response of fetch #{} (latest is #{})",
                ticket.generation,
                self.latest
            );
            return SyncOutcome::Superseded;
        }
        self.pending = false;

        match result {
            Ok(schedule) => {
                self.schedule = Some(schedule);
                SyncOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("Failed to load prayer schedule: {}", e);
                SyncOutcome::Failed(e)
            }
        }
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&PrayerDay> {
        self.schedule.as_ref()?.entry_for(date)
    }

    /// True while the latest fetch has not completed
    pub fn is_loading(&self) -> bool {
        self.pending
    }

    /// Dhuha row is shown unless the loaded schedule is the legacy variant
    pub fn shows_dhuha(&self) -> bool {
        self.schedule.as_ref().map_or(true, Schedule::has_dhuha)
    }
}
