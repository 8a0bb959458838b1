//! Configuration types for holiday tables.
//!
//! This module contains the strongly-typed structures deserialized from the
//! holiday YAML files and the merged in-memory calendar built from them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{EMPTY_HOLIDAYS, HolidaySet, PublicHoliday};

/// One holiday entry as written in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

impl From<HolidayEntry> for PublicHoliday {
    fn from(entry: HolidayEntry) -> Self {
        PublicHoliday {
            date: entry.date,
            name: entry.name,
        }
    }
}

/// Holiday file structure: one calendar year, keyed by country name.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The calendar year the file covers.
    pub year: i32,
    /// Map of country name to that country's holidays.
    pub countries: BTreeMap<String, Vec<HolidayEntry>>,
}

/// Merged holiday tables for every configured country.
///
/// Unknown countries resolve to an empty set.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    years: Vec<i32>,
    countries: BTreeMap<String, HolidaySet>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a parsed holiday file into the calendar.
    pub fn merge(&mut self, file: HolidayFile) {
        if !self.years.contains(&file.year) {
            self.years.push(file.year);
            self.years.sort_unstable();
        }
        for (country, entries) in file.countries {
            let holidays: Vec<PublicHoliday> = entries.into_iter().map(Into::into).collect();
            match self.countries.get_mut(&country) {
                Some(set) => set.extend(holidays),
                None => {
                    self.countries.insert(country, HolidaySet::new(holidays));
                }
            }
        }
    }

    /// Adds or replaces one country's table.
    pub fn insert(&mut self, country: impl Into<String>, holidays: HolidaySet) {
        self.countries.insert(country.into(), holidays);
    }

    /// Returns the holidays for `country`, or an empty set if unknown.
    pub fn holidays_for(&self, country: &str) -> &HolidaySet {
        self.countries.get(country).unwrap_or(&EMPTY_HOLIDAYS)
    }

    /// Checks whether `country` has a table.
    pub fn has_country(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    /// Country names in sorted order.
    pub fn countries(&self) -> Vec<&str> {
        self.countries.keys().map(String::as_str).collect()
    }

    /// Calendar years covered by the loaded files.
    pub fn years(&self) -> &[i32] {
        &self.years
    }
}
