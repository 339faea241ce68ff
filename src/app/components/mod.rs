//! Shared UI components for the web page.

pub mod layout;
pub mod live_clock;
pub mod nav;
pub mod prayer_times;
pub mod quote;
pub mod search_box;
pub mod theme;

pub use layout::Layout;
pub use live_clock::LiveClock;
pub use nav::Nav;
pub use prayer_times::PrayerTimes;
pub use quote::Quote;
pub use search_box::SearchBox;
pub use theme::ThemeToggle;
