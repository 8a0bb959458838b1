//! Day classification.
//!
//! This module provides utilities for determining whether a calendar day is
//! a weekday, Saturday, or Sunday, and for enumerating the days of a closed
//! date range.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of calendar day.
///
/// Saturdays and Sundays never consume PTO.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::DayKind;
///
/// let kind = DayKind::Saturday;
/// assert_eq!(format!("{:?}", kind), "Saturday");
/// assert!(kind.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayKind {
    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayKind::Saturday | DayKind::Sunday)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the [`DayKind`] of a date.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::{day_kind, DayKind};
/// use chrono::NaiveDate;
///
/// // 2026-01-03 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert_eq!(day_kind(saturday), DayKind::Saturday);
///
/// // 2026-01-05 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// assert_eq!(day_kind(monday), DayKind::Weekday);
/// ```
pub fn day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat => DayKind::Saturday,
        Weekday::Sun => DayKind::Sunday,
        _ => DayKind::Weekday,
    }
}

/// Returns `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    day_kind(date).is_weekend()
}

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Returns an empty vector when `start > end`.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}
