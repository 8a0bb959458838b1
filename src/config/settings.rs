//! Server settings read from the environment.

use std::env;
use std::path::PathBuf;

/// Runtime settings for the `pto-planner` binary.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory of holiday YAML files.
    pub holidays_dir: PathBuf,
    /// Directory for JSON profile files; in-memory storage when unset.
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the environment, honoring a `.env` file.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("PTO_PLANNER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PTO_PLANNER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidPort(raw.clone()))?,
            None => 3000,
        };

        let holidays_dir = lookup("PTO_PLANNER_HOLIDAYS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./config/holidays"));

        let data_dir = lookup("PTO_PLANNER_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Settings {
            host,
            port,
            holidays_dir,
            data_dir,
        })
    }

    /// `host:port` for binding the listener.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Errors raised while reading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The port was not a valid `u16`.
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.server_address(), "127.0.0.1:3000");
        assert_eq!(settings.holidays_dir, PathBuf::from("./config/holidays"));
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PTO_PLANNER_HOST", "0.0.0.0"),
            ("PTO_PLANNER_PORT", "8080"),
            ("PTO_PLANNER_DATA_DIR", "/var/lib/pto"),
        ]))
        .unwrap();
        assert_eq!(settings.server_address(), "0.0.0.0:8080");
        assert_eq!(settings.data_dir, Some(PathBuf::from("/var/lib/pto")));
    }

    #[test]
    fn test_invalid_port() {
        let result = Settings::from_lookup(lookup_from(&[("PTO_PLANNER_PORT", "http")]));
        match result {
            Err(SettingsError::InvalidPort(raw)) => assert_eq!(raw, "http"),
            other => panic!("Expected InvalidPort, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_data_dir_means_memory() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PTO_PLANNER_DATA_DIR", "  ")])).unwrap();
        assert!(settings.data_dir.is_none());
    }
}
