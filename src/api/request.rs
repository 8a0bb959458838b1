//! Request types for the PTO planner API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::NewTrip;

/// Request body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    /// The user id; letters, digits, `-` and `_`.
    pub id: String,
    /// Country name selecting the holiday table.
    pub country: String,
    /// Annual PTO allotment. Negative values fail to decode.
    pub total_pto_days: u32,
    /// Time off to seed the profile with.
    #[serde(default)]
    pub time_off_dates: Vec<NaiveDate>,
}

/// Request body for `PUT /users/:id/pto`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePtoRequest {
    /// New annual allotment.
    pub total_pto_days: u32,
}

/// Request body for range preview and time-off commits.
///
/// The two anchors may come in either order. Ranges longer than
/// [`MAX_RANGE_DAYS`](crate::models::MAX_RANGE_DAYS) are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeRequest {
    /// One end of the range.
    pub start: NaiveDate,
    /// The other end of the range.
    pub end: NaiveDate,
}

/// Request body for `POST /users/:id/trips`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Where the trip goes.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<TripRequest> for NewTrip {
    fn from(req: TripRequest) -> Self {
        NewTrip {
            destination: req.destination,
            start_date: req.start_date,
            end_date: req.end_date,
            notes: req.notes,
        }
    }
}

/// Query parameters for `GET /users/:id/calendar`.
///
/// Subject to the same length limit as [`RangeRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarQuery {
    /// One end of the range.
    pub from: NaiveDate,
    /// The other end of the range.
    pub to: NaiveDate,
}
