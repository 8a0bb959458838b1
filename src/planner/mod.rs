//! The planner service.
//!
//! [`Planner`] is the application shell around the accounting engine. Each
//! operation loads the user's profile, applies engine functions to its
//! ledger, enforces the commit gate, and saves the profile back before
//! returning. There is no background sync: a mutation is persisted when the
//! call returns `Ok`, and not at all otherwise.

mod summary;

pub use summary::{CommitOutcome, ProfileSummary, RangePreview, TripOutcome};

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounting::{
    CalendarDay, balance_allows, calendar_view, can_commit, clear_time_off, commit_time_off,
    delete_trip, range_info, remaining,
};
use crate::config::HolidayCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidaySet, NewTrip, SelectionRange, Trip, UserProfile, validate_user_id};
use crate::store::ProfileStore;

/// PTO planning operations over a profile store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pto_planner::config::HolidayCalendar;
/// use pto_planner::planner::Planner;
/// use pto_planner::store::MemoryStore;
/// use chrono::NaiveDate;
///
/// let planner = Planner::new(HolidayCalendar::new(), Arc::new(MemoryStore::new()));
/// planner.create_profile("alice", "Germany", 20, Vec::new()).unwrap();
///
/// // Mon 2 Mar .. Fri 6 Mar 2026
/// let outcome = planner
///     .add_time_off(
///         "alice",
///         NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
///     )
///     .unwrap();
/// assert_eq!(outcome.profile.remaining, 15);
/// ```
#[derive(Clone)]
pub struct Planner {
    calendar: Arc<HolidayCalendar>,
    store: Arc<dyn ProfileStore>,
}

impl Planner {
    /// Creates a planner over the given holiday tables and store.
    pub fn new(calendar: HolidayCalendar, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            calendar: Arc::new(calendar),
            store,
        }
    }

    /// The holiday tables in use.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Holidays for `country`; empty when the country is unknown.
    pub fn holidays_for(&self, country: &str) -> &HolidaySet {
        self.calendar.holidays_for(country)
    }

    /// Creates a new profile, optionally seeded with time off.
    ///
    /// Seed dates are taken as-is without the commit gate, so the new
    /// profile may start with a negative balance.
    pub fn create_profile(
        &self,
        user_id: &str,
        country: &str,
        total_pto_days: u32,
        initial_time_off: Vec<NaiveDate>,
    ) -> EngineResult<ProfileSummary> {
        let mut profile = UserProfile::new(user_id, country.trim(), total_pto_days);
        profile.time_off = initial_time_off.into_iter().collect();
        profile.validate()?;
        self.store.insert_new(&profile)?;

        if !self.calendar.has_country(&profile.country) {
            warn!(
                user_id = %user_id,
                country = %profile.country,
                "No holiday table for country, treating as no holidays"
            );
        }
        info!(
            user_id = %user_id,
            country = %profile.country,
            total_pto_days,
            seeded_days = profile.time_off.len(),
            "Profile created"
        );
        Ok(self.summarize(&profile))
    }

    /// Loads a profile or fails with `ProfileNotFound`.
    pub fn profile(&self, user_id: &str) -> EngineResult<UserProfile> {
        validate_user_id(user_id)?;
        self.store
            .load(user_id)?
            .ok_or_else(|| EngineError::ProfileNotFound {
                user_id: user_id.to_string(),
            })
    }

    /// The profile with its derived balance.
    pub fn summary(&self, user_id: &str) -> EngineResult<ProfileSummary> {
        let profile = self.profile(user_id)?;
        Ok(self.summarize(&profile))
    }

    /// Changes the annual allotment.
    ///
    /// Lowering it below what is already used leaves a negative balance;
    /// nothing is removed from the ledger.
    pub fn set_total_pto(&self, user_id: &str, total_pto_days: u32) -> EngineResult<ProfileSummary> {
        let mut profile = self.profile(user_id)?;
        let previous = profile.total_pto_days;
        profile.total_pto_days = total_pto_days;
        self.store.save(&profile)?;

        let summary = self.summarize(&profile);
        info!(
            user_id = %user_id,
            previous,
            total_pto_days,
            remaining = summary.remaining,
            "PTO allotment updated"
        );
        Ok(summary)
    }

    /// Costs the range between two anchors (any order) without committing.
    pub fn preview_range(
        &self,
        user_id: &str,
        a: NaiveDate,
        b: NaiveDate,
    ) -> EngineResult<RangePreview> {
        let range = SelectionRange::new(a, b);
        range.validate()?;
        let profile = self.profile(user_id)?;
        Ok(self.preview(&profile, range))
    }

    /// Commits the range between two anchors as time off.
    ///
    /// Two checks must pass: `can_commit` on the range's `pto_days_needed`,
    /// and the balance recomputed over the committed ledger must not drop
    /// below zero (or below an already negative balance). The second check
    /// catches holidays on weekends, which `pto_days_needed` subtracts
    /// twice. On failure the profile is left untouched.
    pub fn add_time_off(
        &self,
        user_id: &str,
        a: NaiveDate,
        b: NaiveDate,
    ) -> EngineResult<CommitOutcome> {
        let range = SelectionRange::new(a, b);
        range.validate()?;
        let mut profile = self.profile(user_id)?;
        let preview = self.preview(&profile, range);
        if !preview.can_commit {
            let needed = if can_commit(preview.info.pto_days_needed, preview.remaining) {
                preview.remaining - preview.remaining_after
            } else {
                preview.info.pto_days_needed
            };
            warn!(
                user_id = %user_id,
                start = %preview.start,
                end = %preview.end,
                needed,
                remaining = preview.remaining,
                "Time off rejected, insufficient balance"
            );
            return Err(EngineError::InsufficientBalance {
                needed,
                remaining: preview.remaining,
            });
        }

        profile.time_off = commit_time_off(profile.time_off, &preview.info.all_dates);
        self.store.save(&profile)?;

        let summary = self.summarize(&profile);
        info!(
            user_id = %user_id,
            start = %preview.start,
            end = %preview.end,
            pto_days = preview.info.pto_days_needed,
            remaining = summary.remaining,
            "Time off committed"
        );
        Ok(CommitOutcome {
            committed: preview,
            profile: summary,
        })
    }

    /// Clears all logged time off. Trips are kept.
    pub fn clear_time_off(&self, user_id: &str) -> EngineResult<ProfileSummary> {
        let mut profile = self.profile(user_id)?;
        let cleared = profile.time_off.len();
        profile.time_off = clear_time_off(profile.time_off);
        self.store.save(&profile)?;

        info!(user_id = %user_id, cleared, "Time off cleared");
        Ok(self.summarize(&profile))
    }

    /// Adds a trip and logs its span as time off.
    ///
    /// Only days the ledger does not already hold are charged. The trip is
    /// accepted when the balance after logging its span passes
    /// [`balance_allows`], so a trip over time off that is already logged
    /// only labels it.
    pub fn add_trip(&self, user_id: &str, new_trip: NewTrip) -> EngineResult<TripOutcome> {
        let mut profile = self.profile(user_id)?;
        let trip = new_trip.into_trip(Uuid::new_v4().to_string());
        trip.validate()?;
        SelectionRange::new(trip.start_date, trip.end_date).validate()?;

        let holidays = self.holidays_for(&profile.country);
        let current = remaining(profile.total_pto_days, &profile.time_off, holidays);
        let committed = commit_time_off(profile.time_off.clone(), &trip.span());
        let after = remaining(profile.total_pto_days, &committed, holidays);
        if !balance_allows(current, after) {
            warn!(
                user_id = %user_id,
                destination = %trip.destination,
                needed = current - after,
                remaining = current,
                "Trip rejected, insufficient balance"
            );
            return Err(EngineError::InsufficientBalance {
                needed: current - after,
                remaining: current,
            });
        }
        profile.time_off = committed;

        profile.trips.push(trip.clone());
        self.store.save(&profile)?;

        let summary = self.summarize(&profile);
        info!(
            user_id = %user_id,
            trip_id = %trip.id,
            destination = %trip.destination,
            days = trip.duration_days(),
            remaining = summary.remaining,
            "Trip added"
        );
        Ok(TripOutcome {
            trip,
            profile: summary,
        })
    }

    /// Deletes a trip; its days stay logged as time off.
    pub fn delete_trip(&self, user_id: &str, trip_id: &str) -> EngineResult<ProfileSummary> {
        let mut profile = self.profile(user_id)?;
        let idx = profile
            .trips
            .iter()
            .position(|t| t.id == trip_id)
            .ok_or_else(|| EngineError::TripNotFound {
                trip_id: trip_id.to_string(),
            })?;

        let trip: Trip = profile.trips.remove(idx);
        profile.time_off = delete_trip(&trip, profile.time_off);
        self.store.save(&profile)?;

        info!(
            user_id = %user_id,
            trip_id = %trip_id,
            destination = %trip.destination,
            "Trip deleted"
        );
        Ok(self.summarize(&profile))
    }

    /// Calendar cells for the range between two anchors (any order).
    pub fn calendar_view(
        &self,
        user_id: &str,
        a: NaiveDate,
        b: NaiveDate,
    ) -> EngineResult<Vec<CalendarDay>> {
        let range = SelectionRange::new(a, b);
        range.validate()?;
        let profile = self.profile(user_id)?;
        Ok(calendar_view(
            range.start(),
            range.end(),
            self.holidays_for(&profile.country),
            &profile.time_off,
            &profile.trips,
        ))
    }

    fn summarize(&self, profile: &UserProfile) -> ProfileSummary {
        ProfileSummary::from_profile(profile, self.holidays_for(&profile.country))
    }

    fn preview(&self, profile: &UserProfile, range: SelectionRange) -> RangePreview {
        let holidays = self.holidays_for(&profile.country);
        let info = range_info(range.start(), range.end(), holidays);
        let current = remaining(profile.total_pto_days, &profile.time_off, holidays);
        let committed = commit_time_off(profile.time_off.clone(), &info.all_dates);
        let after = remaining(profile.total_pto_days, &committed, holidays);
        RangePreview {
            start: range.start(),
            end: range.end(),
            remaining: current,
            remaining_after: after,
            can_commit: can_commit(info.pto_days_needed, current)
                && balance_allows(current, after),
            info,
        }
    }
}
