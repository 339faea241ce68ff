//! Prayer schedule model, request paths and response decoding.

mod model;
mod parse;
mod request;
mod slots;

pub use model::{LegacyDay, MonthSchedule, PrayerDay, Schedule};
pub use parse::parse_schedule;
pub use request::ScheduleRequest;
pub use slots::{PrayerSlot, PLACEHOLDER};
