//! Tracker configuration
//!
//! Settings are read from an optional `settings.json` in the platform
//! config directory. Every field has a default, so a missing file or a
//! partial one is fine.

use crate::record::DEFAULT_RECORDS_FILE;
use crate::{TimekeepError, TimekeepResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Name of the settings file inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Configuration for the tracker session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where records are loaded from and saved to
    pub records_path: PathBuf,
    /// How often the running timer display refreshes
    #[serde(rename = "tick_interval_ms", with = "duration_millis")]
    pub tick_interval: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            records_path: PathBuf::from(DEFAULT_RECORDS_FILE),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl TrackerConfig {
    /// Location of the settings file, if the platform has a config directory
    pub fn settings_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("app", "timekeep", "Timekeep")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from `path`, using defaults when the file is absent
    pub fn load_from(path: &Path) -> TimekeepResult<Self> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: TrackerConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TimekeepResult<()> {
        if self.tick_interval.is_zero() {
            return Err(TimekeepError::config("tick_interval_ms must be positive"));
        }
        if self.records_path.as_os_str().is_empty() {
            return Err(TimekeepError::config("records_path must not be empty"));
        }
        Ok(())
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = TrackerConfig::default();
        assert_eq!(config.records_path, PathBuf::from("time_records.json"));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load_from(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_settings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "records_path": "/tmp/log.json" }"#).unwrap();

        let config = TrackerConfig::load_from(file.path()).unwrap();
        assert_eq!(config.records_path, PathBuf::from("/tmp/log.json"));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_tick_interval_in_millis() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "tick_interval_ms": 250 }"#).unwrap();

        let config = TrackerConfig::load_from(file.path()).unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "tick_interval_ms": 0 }"#).unwrap();

        let result = TrackerConfig::load_from(file.path());
        assert!(matches!(result, Err(TimekeepError::Config(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let result = TrackerConfig::load_from(file.path());
        assert!(matches!(result, Err(TimekeepError::Serialization(_))));
    }
}
