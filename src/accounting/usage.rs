//! PTO usage and balance.

use serde::{Deserialize, Serialize};

use crate::models::{HolidaySet, TimeOffLedger};

use super::day_kind::is_weekend;

/// A derived PTO balance.
///
/// Never stored; recomputed from the ledger whenever it is needed.
/// `remaining` may be negative when the ledger was built outside the
/// commit gate (imported data, a lowered allotment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PtoBalance {
    /// Annual allotment in days.
    pub total_allotted: u32,
    /// Ledger days that consumed PTO.
    pub days_used: u32,
    /// `total_allotted - days_used`.
    pub remaining: i64,
}

/// Counts the ledger dates that consume PTO.
///
/// A date consumes PTO when it is neither a Saturday/Sunday nor a holiday
/// in `holidays`. The result is at most `ledger.len()`.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::days_used;
/// use pto_planner::models::{HolidaySet, PublicHoliday, TimeOffLedger};
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
///
/// // Thu 1 Jan (holiday), Fri 2 Jan, Sat 3 Jan
/// let ledger: TimeOffLedger = (1..=3)
///     .map(|d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap())
///     .collect();
///
/// assert_eq!(days_used(&ledger, &holidays), 1);
/// ```
pub fn days_used(ledger: &TimeOffLedger, holidays: &HolidaySet) -> u32 {
    let used = ledger
        .iter()
        .filter(|date| !is_weekend(*date) && !holidays.is_holiday(*date))
        .count();
    u32::try_from(used).unwrap_or(u32::MAX)
}

/// Returns `total_allotted - days_used(ledger, holidays)`.
///
/// The result may be negative; callers decide whether to block or warn.
pub fn remaining(total_allotted: u32, ledger: &TimeOffLedger, holidays: &HolidaySet) -> i64 {
    i64::from(total_allotted) - i64::from(days_used(ledger, holidays))
}

/// Computes the full [`PtoBalance`] in one pass.
pub fn balance(total_allotted: u32, ledger: &TimeOffLedger, holidays: &HolidaySet) -> PtoBalance {
    let used = days_used(ledger, holidays);
    PtoBalance {
        total_allotted,
        days_used: used,
        remaining: i64::from(total_allotted) - i64::from(used),
    }
}
