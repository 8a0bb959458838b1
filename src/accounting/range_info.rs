//! PTO cost of a candidate date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::HolidaySet;

use super::day_kind::{dates_in_range, is_weekend};

/// Breakdown of a closed date range.
///
/// `pto_days_needed` is `total_days - holiday_days - weekend_days`. A holiday
/// that falls on a weekend is subtracted twice, so the figure can undercount
/// and even go negative; `overlap_days` reports how many days were counted
/// twice. The raw value is kept as-is so discrepancies stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeInfo {
    /// Number of calendar days in the range.
    pub total_days: i64,
    /// Days in the range matching a public holiday.
    pub holiday_days: i64,
    /// Days in the range falling on Saturday or Sunday.
    pub weekend_days: i64,
    /// Days that are both a holiday and a weekend day.
    pub overlap_days: i64,
    /// PTO the range would consume.
    pub pto_days_needed: i64,
    /// Every day of the range, in order.
    pub all_dates: Vec<NaiveDate>,
}

/// Computes the [`RangeInfo`] for `[start, end]`.
///
/// The caller normalizes the order first (see
/// [`SelectionRange`](crate::models::SelectionRange)); a reversed range
/// yields an empty result.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::range_info;
/// use pto_planner::models::{HolidaySet, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
///
/// // Mon 29 Dec 2025 .. Fri 2 Jan 2026
/// let info = range_info(
///     NaiveDate::from_ymd_opt(2025, 12, 29).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
///     &holidays,
/// );
///
/// assert_eq!(info.total_days, 5);
/// assert_eq!(info.weekend_days, 0);
/// assert_eq!(info.holiday_days, 1);
/// assert_eq!(info.pto_days_needed, 4);
/// ```
pub fn range_info(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> RangeInfo {
    let all_dates = dates_in_range(start, end);

    let mut holiday_days = 0;
    let mut weekend_days = 0;
    let mut overlap_days = 0;
    for date in &all_dates {
        let holiday = holidays.is_holiday(*date);
        let weekend = is_weekend(*date);
        if holiday {
            holiday_days += 1;
        }
        if weekend {
            weekend_days += 1;
        }
        if holiday && weekend {
            overlap_days += 1;
        }
    }

    let total_days = all_dates.len() as i64;
    RangeInfo {
        total_days,
        holiday_days,
        weekend_days,
        overlap_days,
        pto_days_needed: total_days - holiday_days - weekend_days,
        all_dates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicHoliday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holidays(entries: &[(&str, &str)]) -> HolidaySet {
        entries
            .iter()
            .map(|(date, name)| PublicHoliday {
                date: make_date(date),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_new_year_week() {
        let set = holidays(&[("2026-01-01", "New Year's Day")]);
        let info = range_info(make_date("2025-12-29"), make_date("2026-01-02"), &set);
        assert_eq!(info.total_days, 5);
        assert_eq!(info.weekend_days, 0);
        assert_eq!(info.holiday_days, 1);
        assert_eq!(info.overlap_days, 0);
        assert_eq!(info.pto_days_needed, 4);
    }

    #[test]
    fn test_weekend_only_needs_nothing() {
        // Sat 10 Jan .. Sun 11 Jan 2026
        let info = range_info(
            make_date("2026-01-10"),
            make_date("2026-01-11"),
            &HolidaySet::empty(),
        );
        assert_eq!(info.total_days, 2);
        assert_eq!(info.weekend_days, 2);
        assert_eq!(info.holiday_days, 0);
        assert_eq!(info.pto_days_needed, 0);
    }

    #[test]
    fn test_single_day() {
        let day = make_date("2026-03-11");
        let info = range_info(day, day, &HolidaySet::empty());
        assert_eq!(info.total_days, 1);
        assert_eq!(info.all_dates, vec![day]);
        assert_eq!(info.pto_days_needed, 1);
    }

    #[test]
    fn test_weekend_holiday_is_subtracted_twice() {
        // Easter Saturday 2026-04-04 falls on a Saturday
        let set = holidays(&[("2026-04-04", "Easter Saturday")]);
        let info = range_info(make_date("2026-04-04"), make_date("2026-04-05"), &set);
        assert_eq!(info.total_days, 2);
        assert_eq!(info.weekend_days, 2);
        assert_eq!(info.holiday_days, 1);
        assert_eq!(info.overlap_days, 1);
        assert_eq!(info.pto_days_needed, -1);
    }

    #[test]
    fn test_duplicate_holiday_entries_count_once() {
        let set = holidays(&[("2026-07-14", "Bastille Day"), ("2026-07-14", "Fête nationale")]);
        let info = range_info(make_date("2026-07-13"), make_date("2026-07-15"), &set);
        assert_eq!(info.holiday_days, 1);
        assert_eq!(info.pto_days_needed, 2);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let info = range_info(
            make_date("2026-01-05"),
            make_date("2026-01-01"),
            &HolidaySet::empty(),
        );
        assert_eq!(info.total_days, 0);
        assert_eq!(info.pto_days_needed, 0);
        assert!(info.all_dates.is_empty());
    }

    #[test]
    fn test_two_full_weeks_with_holiday() {
        // Mon 13 Apr .. Sun 26 Apr 2026, ANZAC Day on Sat 25 Apr
        let set = holidays(&[("2026-04-25", "ANZAC Day")]);
        let info = range_info(make_date("2026-04-13"), make_date("2026-04-26"), &set);
        assert_eq!(info.total_days, 14);
        assert_eq!(info.weekend_days, 4);
        assert_eq!(info.holiday_days, 1);
        assert_eq!(info.pto_days_needed, 9);
    }
}
