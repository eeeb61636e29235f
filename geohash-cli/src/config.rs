//! Settings file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

pub use geohash_core::settings::OutputSettings;

/// Reads [`OutputSettings`] from a JSON file; missing fields keep defaults.
pub fn load(path: &Path) -> Result<OutputSettings> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let settings = OutputSettings::from_json(&json)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}
