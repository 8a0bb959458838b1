//! Ledger mutations and the commit gate.
//!
//! Each mutation takes the ledger by value and hands back the updated one;
//! none of them validate. Callers gate with [`can_commit`] first.

use chrono::NaiveDate;

use crate::models::{TimeOffLedger, Trip};

/// Returns `true` if spending `pto_days_needed` keeps the balance at or
/// above zero.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::can_commit;
///
/// assert!(can_commit(2, 2));
/// assert!(!can_commit(3, 2));
/// ```
pub fn can_commit(pto_days_needed: i64, current_remaining: i64) -> bool {
    current_remaining - pto_days_needed >= 0
}

/// Returns `true` if a ledger change that moves the balance from
/// `current_remaining` to `remaining_after` may be committed.
///
/// The balance has to stay at or above zero. A balance that is already
/// negative may not fall any further.
///
/// # Example
///
/// ```
/// use pto_planner::accounting::balance_allows;
///
/// assert!(balance_allows(2, 0));
/// assert!(!balance_allows(0, -1));
/// assert!(balance_allows(-2, -2));
/// ```
pub fn balance_allows(current_remaining: i64, remaining_after: i64) -> bool {
    remaining_after >= 0 || remaining_after >= current_remaining
}

/// Adds `all_dates` to the ledger. Dates already present are left alone.
pub fn commit_time_off(mut ledger: TimeOffLedger, all_dates: &[NaiveDate]) -> TimeOffLedger {
    ledger.extend(all_dates.iter().copied());
    ledger
}

/// Returns the trip's span to the ledger as plain time off.
///
/// Deleting a trip never loses time off: every day of the trip is in the
/// resulting ledger, whether or not it was there before.
pub fn delete_trip(trip: &Trip, mut ledger: TimeOffLedger) -> TimeOffLedger {
    for date in trip.span() {
        ledger.insert(date);
    }
    ledger
}

/// Removes all logged time off.
///
/// There is no partial removal: the whole ledger is cleared regardless of
/// its contents.
pub fn clear_time_off(_ledger: TimeOffLedger) -> TimeOffLedger {
    TimeOffLedger::new()
}
