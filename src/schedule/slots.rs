//! The six prayer rows, in display order.

use super::model::PrayerDay;

/// Shown when a time is missing or not loaded yet
pub const PLACEHOLDER: &str = "--:--";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrayerSlot {
    Subuh,
    Dhuha,
    Dhuhur,
    Ashar,
    Maghrib,
    Isya,
}

impl PrayerSlot {
    pub const ALL: [PrayerSlot; 6] = [
        PrayerSlot::Subuh,
        PrayerSlot::Dhuha,
        PrayerSlot::Dhuhur,
        PrayerSlot::Ashar,
        PrayerSlot::Maghrib,
        PrayerSlot::Isya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrayerSlot::Subuh => "Subuh",
            PrayerSlot::Dhuha => "Dhuha",
            PrayerSlot::Dhuhur => "Dhuhur",
            PrayerSlot::Ashar => "Ashar",
            PrayerSlot::Maghrib => "Maghrib",
            PrayerSlot::Isya => "Isya",
        }
    }

    /// Dhuha is not part of every schema
    pub fn is_optional(&self) -> bool {
        matches!(self, PrayerSlot::Dhuha)
    }

    pub fn value<'a>(&self, day: &'a PrayerDay) -> Option<&'a str> {
        let field = match self {
            PrayerSlot::Subuh => &day.shubuh,
            PrayerSlot::Dhuha => &day.dhuha,
            PrayerSlot::Dhuhur => &day.dzuhur,
            PrayerSlot::Ashar => &day.ashr,
            PrayerSlot::Maghrib => &day.magrib,
            PrayerSlot::Isya => &day.isya,
        };
        field.as_deref()
    }

    /// Time to render, falling back to [`PLACEHOLDER`]
    pub fn display<'a>(&self, day: Option<&'a PrayerDay>) -> &'a str {
        day.and_then(|d| self.value(d))
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(PLACEHOLDER)
    }
}
