//! Public holiday models.
//!
//! This module contains the [`PublicHoliday`] and [`HolidaySet`] types. A
//! holiday set is the reference table for one country; days in it never
//! consume PTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single public holiday.
///
/// # Example
///
/// ```
/// use pto_planner::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "New Year's Day").
    pub name: String,
}

/// The public holidays of one country, ordered by date.
///
/// Matching is by calendar day only. Duplicate dates are kept (two names on
/// the same day) but still count as a single holiday day.
///
/// # Example
///
/// ```
/// use pto_planner::models::{HolidaySet, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let set = HolidaySet::new(vec![
///     PublicHoliday {
///         date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
///         name: "Christmas Day".to_string(),
///     },
///     PublicHoliday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         name: "New Year's Day".to_string(),
///     },
/// ]);
///
/// assert!(set.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert_eq!(set.holidays()[0].name, "New Year's Day");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HolidaySet {
    holidays: Vec<PublicHoliday>,
}

/// The set used for countries without a holiday table.
pub(crate) static EMPTY_HOLIDAYS: HolidaySet = HolidaySet {
    holidays: Vec::new(),
};

impl HolidaySet {
    /// Builds a holiday set, sorting the entries by date.
    pub fn new(mut holidays: Vec<PublicHoliday>) -> Self {
        holidays.sort_by_key(|h| h.date);
        Self { holidays }
    }

    /// Returns an empty holiday set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the holidays, ordered by date.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Returns the number of entries in the set.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns `true` if the set has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Checks whether any holiday falls on `date`.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Returns the first holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&PublicHoliday> {
        let idx = self.holidays.partition_point(|h| h.date < date);
        self.holidays.get(idx).filter(|h| h.date == date)
    }

    pub(crate) fn extend(&mut self, more: Vec<PublicHoliday>) {
        self.holidays.extend(more);
        self.holidays.sort_by_key(|h| h.date);
    }
}

impl FromIterator<PublicHoliday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = PublicHoliday>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(y: i32, m: u32, d: u32, name: &str) -> PublicHoliday {
        PublicHoliday {
            date: date(y, m, d),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_new_sorts_by_date() {
        let set = HolidaySet::new(vec![
            holiday(2026, 12, 25, "Christmas Day"),
            holiday(2026, 1, 1, "New Year's Day"),
            holiday(2026, 7, 4, "Independence Day"),
        ]);
        let dates: Vec<_> = set.holidays().iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2026, 1, 1), date(2026, 7, 4), date(2026, 12, 25)]);
    }

    #[test]
    fn test_is_holiday_matches_same_day_only() {
        let set = HolidaySet::new(vec![holiday(2026, 1, 1, "New Year's Day")]);
        assert!(set.is_holiday(date(2026, 1, 1)));
        assert!(!set.is_holiday(date(2025, 12, 31)));
        assert!(!set.is_holiday(date(2026, 1, 2)));
    }

    #[test]
    fn test_holiday_on_returns_name() {
        let set = HolidaySet::new(vec![
            holiday(2026, 4, 3, "Good Friday"),
            holiday(2026, 4, 6, "Easter Monday"),
        ]);
        assert_eq!(set.holiday_on(date(2026, 4, 6)).unwrap().name, "Easter Monday");
        assert!(set.holiday_on(date(2026, 4, 4)).is_none());
    }

    #[test]
    fn test_empty_set_has_no_holidays() {
        let set = HolidaySet::empty();
        assert!(set.is_empty());
        assert!(!set.is_holiday(date(2026, 1, 1)));
        assert!(EMPTY_HOLIDAYS.is_empty());
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut set = HolidaySet::new(vec![holiday(2026, 5, 1, "Labour Day")]);
        set.extend(vec![holiday(2026, 1, 1, "New Year's Day")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.holidays()[0].date, date(2026, 1, 1));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set = HolidaySet::new(vec![holiday(2026, 12, 25, "Christmas Day")]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"date":"2026-12-25","name":"Christmas Day"}]"#);
    }
}
