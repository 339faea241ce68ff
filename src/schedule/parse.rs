//! Response shape detection and validation.
//!
//! The monthly endpoint answers with a JSON array, the legacy endpoint with a
//! `{ data: { jadwal: {..} } }` object. The body is inspected first and only
//! decoded as the variant the request asked for.

use chrono::NaiveDate;
use serde_json::Value;

use super::model::{LegacyEnvelope, MonthSchedule, PrayerDay, Schedule};
use super::request::ScheduleRequest;
use crate::calendar::days_in_month;
use crate::fetcher::FetchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResponseShape {
    MonthArray,
    LegacyDay,
    Unknown,
}

impl ResponseShape {
    pub(crate) fn detect(value: &Value) -> Self {
        match value {
            Value::Array(_) => ResponseShape::MonthArray,
            Value::Object(map) => {
                let has_jadwal = map
                    .get("data")
                    .and_then(|data| data.get("jadwal"))
                    .is_some_and(Value::is_object);
                if has_jadwal {
                    ResponseShape::LegacyDay
                } else {
                    ResponseShape::Unknown
                }
            }
            _ => ResponseShape::Unknown,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ResponseShape::MonthArray => "a monthly array",
            ResponseShape::LegacyDay => "a single-day object",
            ResponseShape::Unknown => "an unrecognized document",
        }
    }
}

/// Decode a response body for `request`
pub fn parse_schedule(body: &str, request: &ScheduleRequest) -> Result<Schedule, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let shape = ResponseShape::detect(&value);

    match (request, shape) {
        (ScheduleRequest::Monthly { year, month, .. }, ResponseShape::MonthArray) => {
            let days = month_from_value(value, *year, *month)?;
            Ok(Schedule::Month {
                year: *year,
                month: *month,
                days,
            })
        }
        (ScheduleRequest::LegacyDaily { date, .. }, ResponseShape::LegacyDay) => {
            let envelope: LegacyEnvelope =
                serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
            Ok(Schedule::Day {
                date: *date,
                entry: PrayerDay::from(envelope.data.jadwal),
            })
        }
        (ScheduleRequest::Monthly { .. }, other) => Err(FetchError::Shape(format!(
            "expected a monthly array, got {}",
            other.describe()
        ))),
        (ScheduleRequest::LegacyDaily { .. }, other) => Err(FetchError::Shape(format!(
            "expected a single-day object, got {}",
            other.describe()
        ))),
    }
}

fn month_from_value(value: Value, year: i32, month: u32) -> Result<MonthSchedule, FetchError> {
    let days: Vec<PrayerDay> =
        serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
    let days = MonthSchedule::new(days);
    let max_days = days_in_month(year, month).ok_or(FetchError::InvalidMonth(month))?;

    if days.is_empty() {
        return Err(FetchError::Shape("monthly array is empty".to_string()));
    }
    if days.len() > max_days as usize {
        return Err(FetchError::Shape(format!(
            "{} entries for a month with {} days",
            days.len(),
            max_days
        )));
    }

    // Entries must be in day order; only checked where the upstream dates them
    for (index, day) in days.iter().enumerate() {
        let Some(tanggal) = day.tanggal.as_deref() else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(tanggal, "%Y-%m-%d") else {
            continue;
        };
        let expected = NaiveDate::from_ymd_opt(year, month, index as u32 + 1);
        if Some(date) != expected {
            return Err(FetchError::Shape(format!(
                "entry {} is dated {}, expected day {}",
                index,
                tanggal,
                index + 1
            )));
        }
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly(year: i32, month: u32) -> ScheduleRequest {
        ScheduleRequest::Monthly {
            city: "gresik".to_string(),
            year,
            month,
        }
    }

    fn month_body(year: i32, month: u32, days: u32) -> String {
        let entries: Vec<Value> = (1..=days)
            .map(|d| {
                serde_json::json!({
                    "tanggal": format!("{year}-{month:02}-{d:02}"),
                    "imsyak": "04:03",
                    "shubuh": format!("04:{:02}", d),
                    "terbit": "05:25",
                    "dhuha": "05:53",
                    "dzuhur": "11:38",
                    "ashr": "14:51",
                    "magrib": "17:47",
                    "isya": "18:57"
                })
            })
            .collect();
        serde_json::to_string(&entries).unwrap()
    }

    #[test]
    fn detects_both_shapes() {
        assert_eq!(
            ResponseShape::detect(&serde_json::json!([])),
            ResponseShape::MonthArray
        );
        assert_eq!(
            ResponseShape::detect(&serde_json::json!({"data": {"jadwal": {}}})),
            ResponseShape::LegacyDay
        );
        assert_eq!(
            ResponseShape::detect(&serde_json::json!({"status": false})),
            ResponseShape::Unknown
        );
        assert_eq!(
            ResponseShape::detect(&serde_json::json!("nope")),
            ResponseShape::Unknown
        );
    }

    #[test]
    fn parses_a_full_month_in_day_order() {
        let schedule = parse_schedule(&month_body(2024, 3, 31), &monthly(2024, 3)).unwrap();
        let Schedule::Month { days, .. } = &schedule else {
            panic!("expected month variant");
        };
        assert_eq!(days.len(), 31);
        assert_eq!(days.day(1).unwrap().shubuh.as_deref(), Some("04:01"));
        assert_eq!(days.day(31).unwrap().shubuh.as_deref(), Some("04:31"));
        assert!(days.day(32).is_none());
        assert!(schedule.has_dhuha());
    }

    #[test]
    fn missing_fields_are_none() {
        let body = r#"[{"shubuh": "04:10", "dzuhur": "11:40"}]"#;
        let schedule = parse_schedule(body, &monthly(2024, 2)).unwrap();
        let entry = schedule
            .entry_for(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap();
        assert_eq!(entry.shubuh.as_deref(), Some("04:10"));
        assert_eq!(entry.dhuha, None);
        assert_eq!(entry.isya, None);
    }

    #[test]
    fn rejects_more_entries_than_days() {
        let undated: Vec<Value> = (0..30).map(|_| serde_json::json!({})).collect();
        let body = serde_json::to_string(&undated).unwrap();
        let err = parse_schedule(&body, &monthly(2023, 2)).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)), "{err}");
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let body = r#"[{"tanggal": "2024-03-02"}, {"tanggal": "2024-03-01"}]"#;
        let err = parse_schedule(body, &monthly(2024, 3)).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)), "{err}");
    }

    #[test]
    fn rejects_empty_month() {
        let err = parse_schedule("[]", &monthly(2024, 3)).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = parse_schedule("<html>502</html>", &monthly(2024, 3)).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn parses_legacy_day_without_dhuha() {
        let date = NaiveDate::from_ymd_opt(2022, 7, 4).unwrap();
        let request = ScheduleRequest::LegacyDaily {
            region_code: 1606,
            date,
        };
        let body = r#"{"status": true, "data": {"id": 1606, "lokasi": "KAB. GRESIK",
            "jadwal": {"tanggal": "Senin, 04/07/2022", "imsak": "03:58", "subuh": "04:08",
            "dzuhur": "11:32", "ashar": "14:52", "maghrib": "17:26", "isya": "18:41"}}}"#;

        let schedule = parse_schedule(body, &request).unwrap();
        assert!(!schedule.has_dhuha());
        let entry = schedule.entry_for(date).unwrap();
        assert_eq!(entry.shubuh.as_deref(), Some("04:08"));
        assert_eq!(entry.ashr.as_deref(), Some("14:52"));
        assert_eq!(entry.magrib.as_deref(), Some("17:26"));
        assert_eq!(entry.dhuha, None);
        assert!(schedule
            .entry_for(NaiveDate::from_ymd_opt(2022, 7, 5).unwrap())
            .is_none());
    }

    #[test]
    fn shape_must_match_the_request() {
        let legacy_body = r#"{"data": {"jadwal": {"subuh": "04:08"}}}"#;
        let err = parse_schedule(legacy_body, &monthly(2024, 3)).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));

        let request = ScheduleRequest::LegacyDaily {
            region_code: 1606,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let err = parse_schedule(&month_body(2024, 3, 31), &request).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn entries_outside_requested_month_are_not_served() {
        let schedule = parse_schedule(&month_body(2024, 3, 31), &monthly(2024, 3)).unwrap();
        assert!(schedule
            .entry_for(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
            .is_none());
    }
}
