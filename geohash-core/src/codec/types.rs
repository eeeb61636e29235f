//! Codec data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};

/// Valid latitude range in degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees.
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// One of the two geographic axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// North-south position, `[-90, 90]`.
    Latitude,
    /// East-west position, `[-180, 180]`.
    Longitude,
}

impl Axis {
    /// Returns the inclusive `(min, max)` range of this axis in degrees.
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Latitude => (MIN_LAT, MAX_LAT),
            Self::Longitude => (MIN_LNG, MAX_LNG),
        }
    }

    /// Returns `value` if it is finite and inside this axis' range.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Range`] otherwise. NaN and infinities are
    /// always out of range.
    pub fn validate(self, value: f64) -> Result<f64> {
        let (min, max) = self.bounds();
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(CodecError::out_of_range(self, value))
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

/// A validated (latitude, longitude) pair in degrees.
///
/// Construction always goes through [`Coordinate::new`] or [`str::parse`],
/// so a `Coordinate` in hand is known to be inside the geographic bounds.
///
/// # Example
///
/// ```
/// use geohash_core::codec::Coordinate;
///
/// let hanoi: Coordinate = "21.0278, 105.8342".parse().unwrap();
/// assert_eq!(hanoi.latitude(), 21.0278);
/// assert_eq!(hanoi.longitude(), 105.8342);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate after checking both axes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Range`] if latitude is outside `[-90, 90]`,
    /// longitude is outside `[-180, 180]`, or either value is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: Axis::Latitude.validate(latitude)?,
            longitude: Axis::Longitude.validate(longitude)?,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl FromStr for Coordinate {
    type Err = CodecError;

    /// Parses `"lat, lng"`: exactly one comma, whitespace around each
    /// number is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        let [lat, lng] = parts.as_slice() else {
            return Err(CodecError::Format(s.to_string()));
        };

        let latitude = parse_component(Axis::Latitude, lat)?;
        let longitude = parse_component(Axis::Longitude, lng)?;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Parses one trimmed numeric token for `axis`.
pub(crate) fn parse_component(axis: Axis, token: &str) -> Result<f64> {
    let token = token.trim();
    token.parse::<f64>().map_err(|source| CodecError::Parse {
        axis,
        token: token.to_string(),
        source,
    })
}

/// Unchecked wire shape; deserialization funnels through [`Coordinate::new`].
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CodecError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}
