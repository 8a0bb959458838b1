//! Time-off ledger model.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The set of calendar dates a user has committed as time off.
///
/// Dates are unique; inserting a date that is already present is a no-op.
/// Iteration is in ascending date order, but no computation depends on it.
///
/// # Example
///
/// ```
/// use pto_planner::models::TimeOffLedger;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let ledger: TimeOffLedger = [day, day].into_iter().collect();
/// assert_eq!(ledger.len(), 1);
/// assert!(ledger.contains(day));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOffLedger {
    dates: BTreeSet<NaiveDate>,
}

impl TimeOffLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct dates in the ledger.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if no dates are logged.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Checks whether `date` is logged as time off.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Checks whether every date in `dates` is logged.
    pub fn contains_all(&self, dates: &[NaiveDate]) -> bool {
        dates.iter().all(|d| self.dates.contains(d))
    }

    /// Iterates the logged dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }
}

impl FromIterator<NaiveDate> for TimeOffLedger {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for TimeOffLedger {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
