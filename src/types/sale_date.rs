//! Calendar dates for sales and inclusive date ranges.
//!
//! Dates entered at a prompt are validated and stored as `YYYY-MM-DD`. Files
//! written by older tools may hold other spellings; those load as raw text,
//! are written back unchanged, and compare lexicographically.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

/// The date a sale was made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleDate {
    /// A calendar date in canonical `YYYY-MM-DD` form.
    Iso(NaiveDate),
    /// Stored text that is not a canonical date.
    Raw(String),
}

impl SaleDate {
    /// Today in the local timezone.
    pub fn today() -> Self {
        Self::Iso(Local::now().date_naive())
    }
}

impl fmt::Display for SaleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iso(date) => write!(f, "{}", date.format(FORMAT)),
            Self::Raw(text) => f.write_str(text),
        }
    }
}

impl Ord for SaleDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Iso(a), Self::Iso(b)) => a.cmp(b),
            // canonical four-digit years sort the same as text
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl PartialOrd for SaleDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SaleDate {
    type Err = SaleDateError;

    /// Parse user input strictly, normalizing missing zero-padding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, FORMAT)
            .ok()
            .filter(|d| (0..=9999).contains(&d.year()))
            .map(Self::Iso)
            .ok_or_else(|| SaleDateError::InvalidFormat(s.to_string()))
    }
}

impl From<String> for SaleDate {
    /// Classify stored text. Only the exact canonical spelling becomes `Iso`.
    fn from(text: String) -> Self {
        match text.parse() {
            Ok(date @ Self::Iso(_)) if date.to_string() == text => date,
            _ => Self::Raw(text),
        }
    }
}

impl From<SaleDate> for String {
    fn from(date: SaleDate) -> Self {
        date.to_string()
    }
}

/// Error type for date parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaleDateError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),
}

/// An inclusive range of sale dates.
///
/// A range whose start is after its end contains nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: SaleDate,
    pub end: SaleDate,
}

impl DateRange {
    pub fn new(start: SaleDate, end: SaleDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls within the range, bounds included.
    pub fn contains(&self, date: &SaleDate) -> bool {
        &self.start <= date && date <= &self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> SaleDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(d("2024-06-15").to_string(), "2024-06-15");
    }

    #[test]
    fn test_parse_normalizes_padding() {
        assert_eq!(d("2024-6-5").to_string(), "2024-06-05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("15.06.2024".parse::<SaleDate>().is_err());
        assert!("2024-02-30".parse::<SaleDate>().is_err());
        assert!("".parse::<SaleDate>().is_err());
    }

    #[test]
    fn test_serde_uses_iso_string() {
        let json = serde_json::to_string(&d("2025-01-01")).unwrap();
        assert_eq!(json, "\"2025-01-01\"");
        let back: SaleDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d("2025-01-01"));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(d("2024-01-01"), d("2024-12-31"));
        assert!(range.contains(&d("2024-01-01")));
        assert!(range.contains(&d("2024-12-31")));
        assert!(!range.contains(&d("2025-01-01")));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(d("2024-12-31"), d("2024-01-01"));
        assert!(!range.contains(&d("2024-06-15")));
    }

    #[test]
    fn test_stored_text_round_trips_unchanged() {
        for text in ["01.06.2024", "2024-6-5", "someday"] {
            let json = format!("\"{}\"", text);
            let date: SaleDate = serde_json::from_str(&json).unwrap();
            assert_eq!(date, SaleDate::Raw(text.to_string()));
            assert_eq!(serde_json::to_string(&date).unwrap(), json);
        }
        let iso: SaleDate = serde_json::from_str("\"2024-06-05\"").unwrap();
        assert!(matches!(iso, SaleDate::Iso(_)));
    }

    #[test]
    fn test_raw_dates_compare_as_text() {
        let range = DateRange::new(d("2024-01-01"), d("2024-12-31"));
        assert!(range.contains(&SaleDate::Raw("2024-06-15 10:30".into())));
        assert!(!range.contains(&SaleDate::Raw("2024-6-5".into())));
        assert!(!range.contains(&SaleDate::Raw("01.06.2024".into())));
    }
}
