//! Date range selection.
//!
//! [`SelectionRange`] is a normalized candidate range; [`DateSelection`]
//! tracks the click-by-click state of picking one on a calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Longest range, in days, a single request may cover.
pub const MAX_RANGE_DAYS: i64 = 3 * 366;

/// A candidate range with `start <= end`.
///
/// # Example
///
/// ```
/// use pto_planner::models::SelectionRange;
/// use chrono::NaiveDate;
///
/// let later = NaiveDate::from_ymd_opt(2026, 5, 8).unwrap();
/// let earlier = NaiveDate::from_ymd_opt(2026, 5, 4).unwrap();
///
/// let range = SelectionRange::new(later, earlier);
/// assert_eq!(range.start(), earlier);
/// assert_eq!(range.end(), later);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl SelectionRange {
    /// Builds a range from two anchors in either order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether `date` falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Rejects ranges longer than [`MAX_RANGE_DAYS`].
    pub fn validate(&self) -> EngineResult<()> {
        let days = self.len_days();
        if days > MAX_RANGE_DAYS {
            return Err(EngineError::RangeTooLong {
                days,
                max: MAX_RANGE_DAYS,
            });
        }
        Ok(())
    }
}

/// Progress of a two-click range selection.
///
/// The first click anchors the range, the second completes it, and a click
/// on a completed selection starts over from the clicked day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateSelection {
    /// Nothing selected.
    #[default]
    Empty,
    /// One anchor chosen.
    Anchored(NaiveDate),
    /// Both anchors chosen.
    Complete(SelectionRange),
}

impl DateSelection {
    /// Applies a click on `day`.
    pub fn click(self, day: NaiveDate) -> Self {
        match self {
            DateSelection::Empty | DateSelection::Complete(_) => DateSelection::Anchored(day),
            DateSelection::Anchored(start) => {
                DateSelection::Complete(SelectionRange::new(start, day))
            }
        }
    }

    /// Returns the completed range, if any.
    pub fn range(&self) -> Option<SelectionRange> {
        match self {
            DateSelection::Complete(range) => Some(*range),
            _ => None,
        }
    }

    /// Checks whether `date` should render as selected.
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            DateSelection::Empty => false,
            DateSelection::Anchored(start) => *start == date,
            DateSelection::Complete(range) => range.contains(date),
        }
    }

    /// Drops the selection (cancel).
    pub fn clear(self) -> Self {
        DateSelection::Empty
    }
}
