//! Per-day calendar view combining holidays, time off, and trips.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HolidaySet, TimeOffLedger, Trip};

use super::day_kind::{DayKind, dates_in_range, day_kind};

/// Everything a calendar cell shows for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The day.
    pub date: NaiveDate,
    /// Weekday, Saturday, or Sunday.
    pub day_kind: DayKind,
    /// Name of the public holiday on this day, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<String>,
    /// Whether the day is logged as time off.
    pub time_off: bool,
    /// Destinations of trips covering the day.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trips: Vec<String>,
}

/// Builds the calendar cells for `[from, to]`.
pub fn calendar_view(
    from: NaiveDate,
    to: NaiveDate,
    holidays: &HolidaySet,
    ledger: &TimeOffLedger,
    trips: &[Trip],
) -> Vec<CalendarDay> {
    dates_in_range(from, to)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            day_kind: day_kind(date),
            holiday: holidays.holiday_on(date).map(|h| h.name.clone()),
            time_off: ledger.contains(date),
            trips: trips
                .iter()
                .filter(|t| t.contains_date(date))
                .map(|t| t.destination.clone())
                .collect(),
        })
        .collect()
}
