//! User profile model.
//!
//! A profile is the unit of persistence: everything the planner knows about
//! one user's allotment, logged time off, and trips.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{TimeOffLedger, Trip};

/// One user's PTO planning state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque user identifier; also the storage key.
    pub id: String,
    /// Country name selecting the holiday table (e.g., "Germany").
    pub country: String,
    /// Annual PTO allotment in days.
    pub total_pto_days: u32,
    /// Dates logged as time off.
    #[serde(default)]
    pub time_off: TimeOffLedger,
    /// Trips attached to logged time off.
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl UserProfile {
    /// Creates a profile with an empty ledger and no trips.
    pub fn new(id: impl Into<String>, country: impl Into<String>, total_pto_days: u32) -> Self {
        Self {
            id: id.into(),
            country: country.into(),
            total_pto_days,
            time_off: TimeOffLedger::new(),
            trips: Vec::new(),
        }
    }

    /// Validates the profile at the persistence boundary.
    ///
    /// The id must be 1-64 characters of ASCII letters, digits, `-` or `_`
    /// (it doubles as a file name in the JSON store), the country must not
    /// be blank, and every trip must be valid.
    pub fn validate(&self) -> EngineResult<()> {
        validate_user_id(&self.id)?;
        if self.country.trim().is_empty() {
            return Err(EngineError::InvalidProfile {
                field: "country".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        for trip in &self.trips {
            trip.validate()?;
        }
        Ok(())
    }

    /// Finds a trip by id.
    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Trips ordered by start date, then destination.
    pub fn trips_by_start(&self) -> Vec<Trip> {
        let mut trips = self.trips.clone();
        trips.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.destination.cmp(&b.destination))
        });
        trips
    }
}

/// Checks that `id` is usable as a storage key.
pub fn validate_user_id(id: &str) -> EngineResult<()> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidProfile {
            field: "id".to_string(),
            message: "must be 1-64 characters of letters, digits, '-' or '_'".to_string(),
        })
    }
}
