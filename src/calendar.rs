//! Displayed calendar date and Indonesian month names.

use chrono::{Datelike, Local, NaiveDate};

/// Indonesian month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTH_NAMES.get(index).copied()
}

/// Number of days in the given month, `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// The calendar date the page shows prayer times for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewDate {
    date: NaiveDate,
}

impl ViewDate {
    /// Today in the local timezone
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }

    /// "17 Oktober 2026"
    pub fn label(&self) -> String {
        let month = month_name(self.month()).unwrap_or_default();
        format!("{} {} {}", self.day(), month, self.year())
    }
}

impl From<NaiveDate> for ViewDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}
