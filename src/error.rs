//! Error types for the PTO planner.
//!
//! The accounting engine itself is total and never fails; these errors cover
//! everything around it: holiday configuration, profile storage, and
//! validation at the persistence and API boundaries.

use thiserror::Error;

/// The main error type for the PTO planner.
///
/// # Example
///
/// ```
/// use pto_planner::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No profile is stored under the given user id.
    #[error("Profile not found: {user_id}")]
    ProfileNotFound {
        /// The user id that was looked up.
        user_id: String,
    },

    /// A profile already exists under the given user id.
    #[error("Profile already exists: {user_id}")]
    ProfileExists {
        /// The user id that is already taken.
        user_id: String,
    },

    /// A profile field was invalid.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No trip with the given id exists on the profile.
    #[error("Trip not found: {trip_id}")]
    TripNotFound {
        /// The trip id that was looked up.
        trip_id: String,
    },

    /// A trip was invalid or contained inconsistent data.
    #[error("Invalid trip '{trip_id}': {message}")]
    InvalidTrip {
        /// The id of the invalid trip.
        trip_id: String,
        /// A description of what made the trip invalid.
        message: String,
    },

    /// Committing a range would drive the PTO balance negative.
    #[error("Insufficient PTO balance: {needed} days needed, {remaining} remaining")]
    InsufficientBalance {
        /// PTO days the range would consume.
        needed: i64,
        /// PTO days remaining before the commit.
        remaining: i64,
    },

    /// A date range spans more days than a single request may cover.
    #[error("Range of {days} days exceeds the maximum of {max}")]
    RangeTooLong {
        /// Days in the requested range.
        days: i64,
        /// The largest accepted range.
        max: i64,
    },

    /// The profile store failed to read or write.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
