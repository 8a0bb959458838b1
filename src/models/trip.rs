//! Trip model.
//!
//! A trip is time off with a label: its span is always logged in the
//! owner's ledger, and deleting the trip leaves that time off in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::accounting::dates_in_range;
use crate::error::{EngineError, EngineResult};

/// A trip attached to a range of time off.
///
/// # Example
///
/// ```
/// use pto_planner::models::Trip;
/// use chrono::NaiveDate;
///
/// let trip = Trip {
///     id: "trip_001".to_string(),
///     destination: "Lisbon".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
///     notes: None,
/// };
/// assert_eq!(trip.duration_days(), 5);
/// assert!(trip.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// Where the trip goes.
    pub destination: String,
    /// First day of the trip (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive).
    pub end_date: NaiveDate,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trip {
    /// Checks the record invariants: a non-blank destination and
    /// `start_date <= end_date`.
    ///
    /// Called wherever trips enter the system (API requests and profiles
    /// loaded from storage); the accounting engine assumes valid trips.
    pub fn validate(&self) -> EngineResult<()> {
        if self.destination.trim().is_empty() {
            return Err(EngineError::InvalidTrip {
                trip_id: self.id.clone(),
                message: "destination must not be blank".to_string(),
            });
        }
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidTrip {
                trip_id: self.id.clone(),
                message: format!(
                    "start date {} is after end date {}",
                    self.start_date, self.end_date
                ),
            });
        }
        Ok(())
    }

    /// Number of calendar days covered, counting both ends.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks whether `date` falls within the trip (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Every calendar day of the trip, in order.
    pub fn span(&self) -> Vec<NaiveDate> {
        dates_in_range(self.start_date, self.end_date)
    }
}

/// A trip before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrip {
    /// Where the trip goes.
    pub destination: String,
    /// First day of the trip (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the trip (inclusive).
    pub end_date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTrip {
    /// Assigns `id`, trims the destination, and drops blank notes.
    pub fn into_trip(self, id: String) -> Trip {
        Trip {
            id,
            destination: self.destination.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}
