//! Prayer schedule data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the monthly schedule. Any field may be missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PrayerDay {
    /// ISO date ("2024-03-01") when the upstream includes it
    #[serde(default)]
    pub tanggal: Option<String>,
    #[serde(default)]
    pub shubuh: Option<String>,
    /// Only present in the newer schema
    #[serde(default)]
    pub dhuha: Option<String>,
    #[serde(default)]
    pub dzuhur: Option<String>,
    #[serde(default)]
    pub ashr: Option<String>,
    #[serde(default)]
    pub magrib: Option<String>,
    #[serde(default)]
    pub isya: Option<String>,
}

/// A whole month of [`PrayerDay`]s; index `i` is day `i + 1`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MonthSchedule {
    days: Vec<PrayerDay>,
}

impl MonthSchedule {
    pub fn new(days: Vec<PrayerDay>) -> Self {
        Self { days }
    }

    /// Entry for a 1-based day of the month
    pub fn day(&self, day_of_month: u32) -> Option<&PrayerDay> {
        let index = day_of_month.checked_sub(1)? as usize;
        self.days.get(index)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrayerDay> {
        self.days.iter()
    }
}

/// Single-day record of the older `/sholat/jadwal` endpoint
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LegacyDay {
    #[serde(default)]
    pub subuh: Option<String>,
    #[serde(default)]
    pub dzuhur: Option<String>,
    #[serde(default)]
    pub ashar: Option<String>,
    #[serde(default)]
    pub maghrib: Option<String>,
    #[serde(default)]
    pub isya: Option<String>,
}

/// `{ "data": { "jadwal": { ... } } }`
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyEnvelope {
    pub data: LegacyData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyData {
    pub jadwal: LegacyDay,
}

impl From<LegacyDay> for PrayerDay {
    fn from(day: LegacyDay) -> Self {
        Self {
            tanggal: None,
            shubuh: day.subuh,
            dhuha: None,
            dzuhur: day.dzuhur,
            ashr: day.ashar,
            magrib: day.maghrib,
            isya: day.isya,
        }
    }
}

/// A loaded schedule, tagged with the response variant it came from
#[derive(Clone, Debug, PartialEq)]
pub enum Schedule {
    Month {
        year: i32,
        month: u32,
        days: MonthSchedule,
    },
    /// Older endpoint: exactly one day, no Dhuha
    Day { date: NaiveDate, entry: PrayerDay },
}

impl Schedule {
    /// Entry for `date`, if this schedule covers it
    pub fn entry_for(&self, date: NaiveDate) -> Option<&PrayerDay> {
        use chrono::Datelike;

        match self {
            Schedule::Month { year, month, days } => {
                if date.year() == *year && date.month() == *month {
                    days.day(date.day())
                } else {
                    None
                }
            }
            Schedule::Day { date: day, entry } => (*day == date).then_some(entry),
        }
    }

    /// Whether the response schema carries a Dhuha time at all
    pub fn has_dhuha(&self) -> bool {
        matches!(self, Schedule::Month { .. })
    }
}
