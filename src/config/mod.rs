//! Configuration loading for the PTO planner.
//!
//! This module loads the per-country public holiday tables from YAML files
//! and reads the server settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use pto_planner::config::HolidayLoader;
//!
//! let calendar = HolidayLoader::load("./config/holidays").unwrap();
//! let germany = calendar.holidays_for("Germany");
//! println!("Germany has {} public holidays", germany.len());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::HolidayLoader;
pub use settings::{Settings, SettingsError};
pub use types::{HolidayCalendar, HolidayEntry, HolidayFile};
