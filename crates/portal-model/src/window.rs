//! Year-month time window.
//!
//! Requests are scoped to the month they were created in; the session keeps
//! one selected window and the visibility filter tests membership against it.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::ModelError;

/// A calendar month used to scope visible requests.
///
/// Parses and prints as `YYYY-MM`. Serialized as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthWindow {
    year: i32,
    month: u32,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, ModelError> {
        if !(1..=12).contains(&month) || !(1900..=9999).contains(&year) {
            return Err(ModelError::InvalidWindow(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// Build a window from parts known valid at compile time; panics on an
    /// out-of-range month. Runtime input goes through [`MonthWindow::new`]
    /// or `FromStr`.
    pub const fn of(year: i32, month: u32) -> Self {
        assert!(month >= 1 && month <= 12);
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// True if `date` falls inside this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The 15th of the window — the default created date for new requests.
    pub fn mid_month(&self) -> NaiveDate {
        // The 15th exists in every month, so this cannot fail.
        NaiveDate::from_ymd_opt(self.year, self.month, 15).unwrap_or_default()
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthWindow {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| ModelError::InvalidWindow(trimmed.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ModelError::InvalidWindow(trimmed.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ModelError::InvalidWindow(trimmed.to_string()))?;
        Self::new(year, month)
    }
}

impl serde::Serialize for MonthWindow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthWindow {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints() {
        let window: MonthWindow = "2026-01".parse().expect("parse window");
        assert_eq!(window.year(), 2026);
        assert_eq!(window.month(), 1);
        assert_eq!(window.to_string(), "2026-01");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("2026".parse::<MonthWindow>().is_err());
        assert!("2026-13".parse::<MonthWindow>().is_err());
        assert!("2026-00".parse::<MonthWindow>().is_err());
        assert!("jan-2026".parse::<MonthWindow>().is_err());
    }

    #[test]
    fn membership_matches_year_and_month() {
        let window: MonthWindow = "2026-01".parse().expect("parse window");
        let inside = NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date");
        let outside = NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date");
        assert!(window.contains(inside));
        assert!(!window.contains(outside));
    }

    #[test]
    fn mid_month_is_the_fifteenth() {
        let window: MonthWindow = "2026-02".parse().expect("parse window");
        assert_eq!(
            window.mid_month(),
            NaiveDate::from_ymd_opt(2026, 2, 15).expect("valid date")
        );
    }
}
