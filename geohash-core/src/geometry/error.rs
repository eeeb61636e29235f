//! Error types for geometry operations.

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur while computing search areas.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Radius is negative, NaN or infinite.
    #[error("Invalid radius {0} km: must be a finite, non-negative number")]
    InvalidRadius(f64),

    /// Centre latitude is too close to a pole for a longitude span.
    #[error("Latitude {0} is too close to a pole to bound longitude")]
    PolarLatitude(f64),

    /// Centre coordinate failed validation.
    #[error(transparent)]
    Coordinate(#[from] CodecError),
}

/// Result type alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
