//! PTO accounting engine.
//!
//! Pure functions over a country's holiday set and a time-off ledger:
//! classifying days, counting PTO used, costing a candidate range, gating
//! commits against the remaining balance, and folding ranges and deleted
//! trips into the ledger. Nothing here performs I/O or holds state; the
//! caller owns the ledger and persists it.

mod calendar_view;
mod commit;
mod day_kind;
mod range_info;
mod usage;

pub use calendar_view::{CalendarDay, calendar_view};
pub use commit::{balance_allows, can_commit, clear_time_off, commit_time_off, delete_trip};
pub use day_kind::{DayKind, dates_in_range, day_kind, is_weekend};
pub use range_info::{RangeInfo, range_info};
pub use usage::{PtoBalance, balance, days_used, remaining};
