//! Holiday configuration loading.
//!
//! This module provides the [`HolidayLoader`] type for loading per-country
//! public holiday tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayCalendar, HolidayFile};

/// Loads holiday tables from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/holidays/
/// ├── 2026.yaml   # year: 2026, countries: { "Germany": [...], ... }
/// └── 2027.yaml
/// ```
///
/// Every `*.yaml` file is read and merged; a country may appear in several
/// files and its holidays are combined in date order.
///
/// # Example
///
/// ```no_run
/// use pto_planner::config::HolidayLoader;
///
/// let calendar = HolidayLoader::load("./config/holidays").unwrap();
/// println!("Countries: {:?}", calendar.countries());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HolidayLoader;

impl HolidayLoader {
    /// Loads and merges every holiday file in `path`.
    ///
    /// # Returns
    ///
    /// The merged [`HolidayCalendar`], or an error if:
    /// - The directory does not exist or contains no `.yaml` files
    /// - Any file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<HolidayCalendar> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", dir_str),
            });
        }
        files.sort();

        let mut calendar = HolidayCalendar::new();
        for file in &files {
            let parsed = Self::load_file(file)?;
            debug!(
                file = %file.display(),
                year = parsed.year,
                countries = parsed.countries.len(),
                "Loaded holiday file"
            );
            calendar.merge(parsed);
        }

        info!(
            path = %dir_str,
            files = files.len(),
            countries = calendar.countries().len(),
            "Holiday calendar loaded"
        );
        Ok(calendar)
    }

    /// Loads and parses a single holiday file.
    pub fn load_file(path: &Path) -> EngineResult<HolidayFile> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
