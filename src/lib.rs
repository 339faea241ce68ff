//! Jadwal Sholat - prayer times page
//!
//! A client-side Dioxus page showing the daily prayer schedule for a city.
//!
//! This library provides:
//! - Monthly schedule fetching from the jadwalsholat data API (plus the older daily endpoint)
//! - Request-generation tracking so a superseded response never replaces a newer one
//! - City search, a one-second clock ticker and a persisted light/dark theme
//! - The Dioxus web UI composing them

pub mod app;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod fetcher;
pub mod http;
pub mod logging;
pub mod page;
pub mod schedule;
pub mod search;
pub mod sync;
pub mod theme;
