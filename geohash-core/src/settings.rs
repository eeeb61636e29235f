//! Output settings for the command facade.

use serde::{Deserialize, Serialize};

/// Largest number of decimal places printed for a decoded coordinate.
///
/// Twelve-character geohashes resolve to roughly 1e-7 degrees, so digits
/// past this point are noise.
pub const MAX_DECIMAL_PLACES: u8 = 10;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text, e.g. `21.0278, 105.8342`
    #[default]
    Plain,
    /// One JSON object per result
    Json,
}

/// Settings controlling how results are printed.
///
/// These settings never change what is encoded or decoded, only how the
/// numbers are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimal places for decoded coordinates and distances (0-10)
    pub decimal_places: u8,

    /// Plain text or JSON output
    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            decimal_places: 4,
            format: OutputFormat::Plain,
        }
    }
}

impl OutputSettings {
    /// Returns the decimal places to print, clamped to [`MAX_DECIMAL_PLACES`].
    #[must_use]
    pub fn precision(&self) -> usize {
        usize::from(self.decimal_places.min(MAX_DECIMAL_PLACES))
    }

    /// Creates `OutputSettings` from a JSON string.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (extremely rare).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
