//! HTTP API module for the PTO planner.
//!
//! This module provides the REST API endpoints for profiles, time off,
//! trips and the holiday tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarQuery, CreateProfileRequest, RangeRequest, TripRequest, UpdatePtoRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
