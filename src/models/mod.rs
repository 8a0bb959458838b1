//! Core data models for the PTO planner.
//!
//! This module contains all the domain models used throughout the planner.

mod holiday;
mod ledger;
mod profile;
mod selection;
mod trip;

pub(crate) use holiday::EMPTY_HOLIDAYS;
pub use holiday::{HolidaySet, PublicHoliday};
pub use ledger::TimeOffLedger;
pub use profile::{UserProfile, validate_user_id};
pub use selection::{DateSelection, MAX_RANGE_DAYS, SelectionRange};
pub use trip::{NewTrip, Trip};
