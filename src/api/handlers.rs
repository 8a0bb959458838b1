//! HTTP request handlers for the PTO planner API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;

use super::request::{
    CalendarQuery, CreateProfileRequest, RangeRequest, TripRequest, UpdatePtoRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/countries", get(countries_handler))
        .route("/holidays/:country", get(holidays_handler))
        .route("/users", post(create_profile_handler))
        .route("/users/:id", get(profile_handler))
        .route("/users/:id/pto", put(update_pto_handler))
        .route("/users/:id/range-preview", post(range_preview_handler))
        .route(
            "/users/:id/time-off",
            post(add_time_off_handler).delete(clear_time_off_handler),
        )
        .route("/users/:id/trips", post(add_trip_handler))
        .route("/users/:id/trips/:trip_id", delete(delete_trip_handler))
        .route("/users/:id/calendar", get(calendar_handler))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Handler for GET /countries.
async fn countries_handler(State(state): State<AppState>) -> impl IntoResponse {
    let countries: Vec<String> = state
        .planner()
        .calendar()
        .countries()
        .into_iter()
        .map(str::to_string)
        .collect();
    json_response(StatusCode::OK, &countries)
}

/// Handler for GET /holidays/:country.
///
/// An unknown country yields an empty list.
async fn holidays_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> impl IntoResponse {
    let holidays = state.planner().holidays_for(&country);
    if holidays.is_empty() && !state.planner().calendar().has_country(&country) {
        warn!(country = %country, "Holidays requested for unknown country");
    }
    json_response(StatusCode::OK, holidays)
}

/// Handler for POST /users.
async fn create_profile_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create profile request");

    let request = match decode(payload, correlation_id) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    respond(
        correlation_id,
        StatusCode::CREATED,
        state
            .run(move |planner| {
                planner.create_profile(
                    &request.id,
                    &request.country,
                    request.total_pto_days,
                    request.time_off_dates,
                )
            })
            .await,
    )
}

/// Handler for GET /users/:id.
async fn profile_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.run(move |planner| planner.summary(&id)).await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for PUT /users/:id/pto.
async fn update_pto_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePtoRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %id, "Processing allotment update");

    let request = match decode(payload, correlation_id) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    respond(
        correlation_id,
        StatusCode::OK,
        state
            .run(move |planner| planner.set_total_pto(&id, request.total_pto_days))
            .await,
    )
}

/// Handler for POST /users/:id/range-preview.
async fn range_preview_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match decode(payload, correlation_id) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    respond(
        correlation_id,
        StatusCode::OK,
        state
            .run(move |planner| planner.preview_range(&id, request.start, request.end))
            .await,
    )
}

/// Handler for POST /users/:id/time-off.
///
/// Commits the range, or answers 409 when the balance cannot cover it.
async fn add_time_off_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %id, "Processing time off request");

    let request = match decode(payload, correlation_id) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    respond(
        correlation_id,
        StatusCode::OK,
        state
            .run(move |planner| planner.add_time_off(&id, request.start, request.end))
            .await,
    )
}

/// Handler for DELETE /users/:id/time-off.
async fn clear_time_off_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %id, "Processing clear time off request");
    let result = state.run(move |planner| planner.clear_time_off(&id)).await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /users/:id/trips.
async fn add_trip_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %id, "Processing trip request");

    let request = match decode(payload, correlation_id) {
        Ok(req) => req,
        Err(err) => return err.into_response(),
    };

    respond(
        correlation_id,
        StatusCode::CREATED,
        state
            .run(move |planner| planner.add_trip(&id, request.into()))
            .await,
    )
}

/// Handler for DELETE /users/:id/trips/:trip_id.
async fn delete_trip_handler(
    State(state): State<AppState>,
    Path((id, trip_id)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %id,
        trip_id = %trip_id,
        "Processing trip deletion"
    );
    respond(
        correlation_id,
        StatusCode::OK,
        state
            .run(move |planner| planner.delete_trip(&id, &trip_id))
            .await,
    )
}

/// Handler for GET /users/:id/calendar?from=&to=.
async fn calendar_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query string error"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
                .into_response();
        }
    };

    respond(
        correlation_id,
        StatusCode::OK,
        state
            .run(move |planner| planner.calendar_view(&id, query.from, query.to))
            .await,
    )
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn decode<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(req)) => return Ok(req),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Renders a planner result, logging failures against the correlation id.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    status: StatusCode,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => json_response(status, &body),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, &api_error.error)
        }
    }
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
