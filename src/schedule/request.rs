//! Request paths for both upstream schemas.

use chrono::{Datelike, NaiveDate};

use crate::config::ApiSchema;
use crate::fetcher::FetchError;

/// What to ask the upstream for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleRequest {
    Monthly { city: String, year: i32, month: u32 },
    LegacyDaily { region_code: u32, date: NaiveDate },
}

impl ScheduleRequest {
    /// Request for the page's current city and date under the configured schema.
    /// The legacy endpoint is keyed by region code, not city.
    pub fn for_view(schema: &ApiSchema, city: &str, date: NaiveDate) -> Self {
        match schema {
            ApiSchema::Monthly => ScheduleRequest::Monthly {
                city: city.to_string(),
                year: date.year(),
                month: date.month(),
            },
            ApiSchema::LegacyDaily { region_code } => ScheduleRequest::LegacyDaily {
                region_code: *region_code,
                date,
            },
        }
    }

    pub fn url(&self, base_url: &str) -> Result<String, FetchError> {
        match self {
            ScheduleRequest::Monthly { city, year, month } => {
                monthly_url(base_url, city, *year, *month)
            }
            ScheduleRequest::LegacyDaily { region_code, date } => {
                Ok(legacy_daily_url(base_url, *region_code, *date))
            }
        }
    }
}

/// `{base}/{city}/{year}/{MM}.json` with the city lower-cased and the month zero-padded
pub(crate) fn monthly_url(
    base_url: &str,
    city: &str,
    year: i32,
    month: u32,
) -> Result<String, FetchError> {
    if !(1..=12).contains(&month) {
        return Err(FetchError::InvalidMonth(month));
    }
    let city = city.to_lowercase();
    Ok(format!(
        "{}/{}/{}/{:02}.json",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&city),
        year,
        month
    ))
}

/// `{base}/sholat/jadwal/{region}/{year}/{month}/{day}`, month and day unpadded
pub(crate) fn legacy_daily_url(base_url: &str, region_code: u32, date: NaiveDate) -> String {
    format!(
        "{}/sholat/jadwal/{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        region_code,
        date.year(),
        date.month(),
        date.day()
    )
}
