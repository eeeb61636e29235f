//! Error types for codec operations.
//!
//! This module defines errors that can occur while parsing coordinates
//! and while validating or decoding geohash strings.

use std::num::ParseFloatError;

use thiserror::Error;

use super::types::Axis;

/// Errors that can occur during encoding and decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Input is not a single comma-separated `lat, lng` pair.
    #[error("Invalid coordinates format: expected \"lat, lng\", got {0:?}")]
    Format(String),

    /// A coordinate token is not a real number.
    #[error("Invalid {axis} {token:?}: {source}")]
    Parse {
        /// The axis the token was meant for.
        axis: Axis,
        /// The offending token, trimmed.
        token: String,
        /// The underlying float parsing error.
        source: ParseFloatError,
    },

    /// A coordinate is outside its geographic bounds (or not finite).
    #[error("{axis} {value} is out of range [{min}, {max}]")]
    Range {
        /// The axis that was out of range.
        axis: Axis,
        /// The rejected value.
        value: f64,
        /// Lower bound of the axis.
        min: f64,
        /// Upper bound of the axis.
        max: f64,
    },

    /// A geohash contains a character outside the base-32 alphabet.
    #[error("Invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position in the geohash.
        index: usize,
    },

    /// A geohash is empty or longer than the maximum length.
    #[error("Invalid geohash length {0}: must be between 1 and 12")]
    InvalidLength(usize),
}

impl CodecError {
    /// Builds a [`CodecError::Range`] for the given axis.
    #[must_use]
    pub fn out_of_range(axis: Axis, value: f64) -> Self {
        let (min, max) = axis.bounds();
        Self::Range {
            axis,
            value,
            min,
            max,
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_display() {
        let err = CodecError::Format("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid coordinates format: expected \"lat, lng\", got \"abc\""
        );
    }

    #[test]
    fn parse_error_display() {
        let source = "x1".parse::<f64>().unwrap_err();
        let err = CodecError::Parse {
            axis: Axis::Latitude,
            token: "x1".to_string(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "Invalid latitude \"x1\": invalid float literal"
        );
    }

    #[test]
    fn range_error_display() {
        let err = CodecError::out_of_range(Axis::Latitude, 91.0);
        assert_eq!(err.to_string(), "latitude 91 is out of range [-90, 90]");

        let err = CodecError::out_of_range(Axis::Longitude, -180.5);
        assert_eq!(
            err.to_string(),
            "longitude -180.5 is out of range [-180, 180]"
        );
    }

    #[test]
    fn invalid_character_error_display() {
        let err = CodecError::InvalidCharacter {
            character: 'a',
            index: 3,
        };
        assert_eq!(err.to_string(), "Invalid character 'a' at index 3");
    }

    #[test]
    fn invalid_length_error_display() {
        let err = CodecError::InvalidLength(13);
        assert_eq!(
            err.to_string(),
            "Invalid geohash length 13: must be between 1 and 12"
        );
    }

    #[test]
    fn error_debug_format() {
        let err = CodecError::InvalidLength(0);
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("InvalidLength"));
    }
}
