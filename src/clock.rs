//! One-second clock for the page header.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// 24-hour `HH:MM:SS`
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Calls back with the current time immediately and then once per period.
#[derive(Clone, Copy, Debug)]
pub struct ClockTicker {
    period: Duration,
}

impl Default for ClockTicker {
    fn default() -> Self {
        Self {
            period: TICK_PERIOD,
        }
    }
}

impl ClockTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick forever. Stops when the future is dropped, which is how a Dioxus
    /// `use_future` tears it down with its component.
    pub async fn run<F: FnMut(DateTime<Local>)>(&self, mut on_tick: F) {
        loop {
            on_tick(Local::now());
            sleep(self.period).await;
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(period: Duration) {
    gloo_timers::future::sleep(period).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(period: Duration) {
    tokio::time::sleep(period).await;
}
