//! Read models returned by the planner.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::accounting::{RangeInfo, balance};
use crate::models::{HolidaySet, Trip, UserProfile};

/// A profile together with its derived balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// The user id.
    pub id: String,
    /// Country selecting the holiday table.
    pub country: String,
    /// Annual PTO allotment.
    pub total_pto_days: u32,
    /// PTO consumed by logged time off.
    pub days_used: u32,
    /// `total_pto_days - days_used`; negative when over-allocated.
    pub remaining: i64,
    /// Logged time off, ascending.
    pub time_off_dates: Vec<NaiveDate>,
    /// Trips ordered by start date.
    pub trips: Vec<Trip>,
}

impl ProfileSummary {
    /// Builds the summary of `profile` against its country's holidays.
    pub fn from_profile(profile: &UserProfile, holidays: &HolidaySet) -> Self {
        let b = balance(profile.total_pto_days, &profile.time_off, holidays);
        Self {
            id: profile.id.clone(),
            country: profile.country.clone(),
            total_pto_days: profile.total_pto_days,
            days_used: b.days_used,
            remaining: b.remaining,
            time_off_dates: profile.time_off.iter().collect(),
            trips: profile.trips_by_start(),
        }
    }
}

/// The cost of a candidate range against a user's current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePreview {
    /// First day of the normalized range.
    pub start: NaiveDate,
    /// Last day of the normalized range.
    pub end: NaiveDate,
    /// Breakdown of the range.
    #[serde(flatten)]
    pub info: RangeInfo,
    /// Balance before committing.
    pub remaining: i64,
    /// Balance after committing.
    pub remaining_after: i64,
    /// Whether the commit gate would accept the range.
    pub can_commit: bool,
}

/// Result of an accepted range commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitOutcome {
    /// The range that was committed.
    pub committed: RangePreview,
    /// The profile after the commit.
    pub profile: ProfileSummary,
}

/// Result of an accepted trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOutcome {
    /// The stored trip, with its assigned id.
    pub trip: Trip,
    /// The profile after the trip was added.
    pub profile: ProfileSummary,
}
