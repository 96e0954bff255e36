use chrono::NaiveDate;
use serde::Serialize;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Inclusive date range that every sample's `mediaDate` must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CollectionWindow {
    /// The study period: January 1 to March 31, 2025.
    pub const STUDY: Self = Self {
        start: ymd(2025, 1, 1),
        end: ymd(2025, 3, 31),
    };

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for CollectionWindow {
    fn default() -> Self {
        Self::STUDY
    }
}

impl std::fmt::Display for CollectionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
