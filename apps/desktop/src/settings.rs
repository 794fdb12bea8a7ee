//! Settings discovery for the desktop shell

use anyhow::Context;
use std::path::Path;
use timekeep_core::TrackerConfig;
use tracing::debug;

/// Load settings from the platform config directory
pub fn load_settings() -> anyhow::Result<TrackerConfig> {
    match TrackerConfig::settings_file() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Ok(TrackerConfig::default())
        }
    }
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<TrackerConfig> {
    let config = TrackerConfig::load_from(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    debug!("Loaded settings: {:?}", config);
    Ok(config)
}
