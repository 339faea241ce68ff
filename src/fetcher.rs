//! Schedule fetching from the upstream JSON API.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::AppConfig;
use crate::http::HttpTransport;
use crate::schedule::{parse_schedule, MonthSchedule, Schedule, ScheduleRequest};

/// Every way a schedule load can fail. None of them are fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream answered HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Anything that can produce a [`Schedule`] for a request.
///
/// Not `Send`: the browser fetch future lives on the UI thread.
#[async_trait(?Send)]
pub trait ScheduleSource {
    async fn fetch(&self, request: &ScheduleRequest) -> Result<Schedule, FetchError>;
}

/// Fetches schedules over HTTP from `base_url`
#[derive(Clone)]
pub struct HttpScheduleFetcher {
    base_url: String,
    transport: HttpTransport,
}

impl HttpScheduleFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: HttpTransport::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One month of the newer schema for `city`
    pub async fn fetch_month(
        &self,
        city: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthSchedule, FetchError> {
        let request = ScheduleRequest::Monthly {
            city: city.to_string(),
            year,
            month,
        };
        match self.fetch(&request).await? {
            Schedule::Month { days, .. } => Ok(days),
            Schedule::Day { .. } => Err(FetchError::Shape(
                "expected a monthly array, got a single-day object".to_string(),
            )),
        }
    }
}

#[async_trait(?Send)]
impl ScheduleSource for HttpScheduleFetcher {
    async fn fetch(&self, request: &ScheduleRequest) -> Result<Schedule, FetchError> {
        let url = request.url(&self.base_url)?;
        tracing::debug!("GET {}", url);
        let body = self.transport.get_text(&url).await?;
        parse_schedule(&body, request)
    }
}
