//! Geometry utilities bundled with the codec.
//!
//! These helpers answer the questions a caller asks before turning a
//! proximity query into geohash prefixes:
//! - which rectangle covers a radius around a point ([`bounding_box`])
//! - how many geohash characters suit that radius ([`estimate_length`])
//! - how far apart two points are on the globe ([`distance`])
//!
//! All of them are flat approximations on a spherical Earth; none of them
//! touches the bit layout of the codec.

mod error;
mod types;

pub use error::{GeometryError, Result};
pub use types::BoundingBox;

use log::debug;

use crate::codec::{Coordinate, MAX_LENGTH};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per degree of latitude.
pub const KM_PER_DEGREE_LAT: f64 = 111.1;

/// Kilometres per degree of longitude at the equator.
pub const KM_PER_DEGREE_LNG: f64 = 111.320;

/// Half the width of the Web Mercator projection in kilometres.
pub const MERCATOR_MAX_KM: f64 = 20_037.726_37;

/// Smallest `cos(latitude)` for which a longitude span is still computed.
const MIN_COS_LAT: f64 = 1e-9;

/// Computes the rectangle covering `radius_km` around `center`.
///
/// The latitude delta is `radius / 111.1` and the longitude delta is
/// `radius / (111.32 * cos(lat))`; the edges are not wrapped or clamped.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidRadius`] for a negative or non-finite
/// radius and [`GeometryError::PolarLatitude`] when the centre sits on a
/// pole, where the longitude delta diverges.
///
/// # Examples
///
/// ```
/// use geohash_core::codec::Coordinate;
/// use geohash_core::geometry::bounding_box;
///
/// let area = bounding_box(Coordinate::new(0.0, 0.0).unwrap(), 111.1).unwrap();
/// assert!((area.max_lat - 1.0).abs() < 1e-12);
/// assert!((area.min_lat + 1.0).abs() < 1e-12);
/// ```
pub fn bounding_box(center: Coordinate, radius_km: f64) -> Result<BoundingBox> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(GeometryError::InvalidRadius(radius_km));
    }

    let lat = center.latitude();
    let lng = center.longitude();
    let cos_lat = lat.to_radians().cos();
    if cos_lat < MIN_COS_LAT {
        return Err(GeometryError::PolarLatitude(lat));
    }

    let delta_lat = radius_km / KM_PER_DEGREE_LAT;
    let delta_lng = radius_km / (KM_PER_DEGREE_LNG * cos_lat);

    let area = BoundingBox {
        min_lat: lat - delta_lat,
        max_lat: lat + delta_lat,
        min_lng: lng - delta_lng,
        max_lng: lng + delta_lng,
    };
    debug!("bounding box of {radius_km} km around {center}: {area:?}");
    Ok(area)
}

/// Like [`bounding_box`], taking raw degrees.
///
/// # Errors
///
/// Additionally returns [`GeometryError::Coordinate`] if the centre is out
/// of range.
pub fn bounding_box_lat_lng(lat: f64, lng: f64, radius_km: f64) -> Result<BoundingBox> {
    bounding_box(Coordinate::new(lat, lng)?, radius_km)
}

/// Estimates a geohash length for searching within `radius_km`.
///
/// Doubles the radius until it reaches the Mercator half-width, then maps
/// every five doublings to one character, clamped to `1..=12`. A zero,
/// negative or NaN radius is a point query and gets the full 12
/// characters.
///
/// # Examples
///
/// ```
/// use geohash_core::geometry::estimate_length;
///
/// assert_eq!(estimate_length(0.0), 12);
/// assert_eq!(estimate_length(1.0), 3);
/// assert_eq!(estimate_length(20_037.73), 1);
/// ```
#[must_use]
pub fn estimate_length(radius_km: f64) -> usize {
    if radius_km.is_nan() || radius_km <= 0.0 {
        return MAX_LENGTH;
    }

    let mut span = radius_km;
    let mut steps = 0_usize;
    while span < MERCATOR_MAX_KM {
        span *= 2.0;
        steps += 1;
    }
    (steps / 5).clamp(1, MAX_LENGTH)
}

/// Great-circle distance in kilometres between two points (haversine).
///
/// # Examples
///
/// ```
/// use geohash_core::codec::Coordinate;
/// use geohash_core::geometry::distance;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// assert!((distance(a, b) - 111.195).abs() < 1e-3);
/// ```
#[must_use]
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    distance_km(
        from.latitude(),
        from.longitude(),
        to.latitude(),
        to.longitude(),
    )
}

/// Haversine distance on raw degrees; inputs are not range-checked.
#[must_use]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push antipodal points just past 1.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::codec::CodecError;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn bounding_box_at_equator_is_symmetric() {
        let area = bounding_box(coord(0.0, 0.0), 10.0).unwrap();
        assert!((area.max_lat - 10.0 / 111.1).abs() < 1e-12);
        assert!((area.max_lng - 10.0 / 111.32).abs() < 1e-12);
        assert_eq!(area.min_lat, -area.max_lat);
        assert_eq!(area.min_lng, -area.max_lng);
    }

    #[test]
    fn bounding_box_widens_in_longitude_away_from_equator() {
        let equator = bounding_box(coord(0.0, 0.0), 50.0).unwrap();
        let north = bounding_box(coord(60.0, 0.0), 50.0).unwrap();
        let equator_span = equator.max_lng - equator.min_lng;
        let north_span = north.max_lng - north.min_lng;
        // cos(60°) = 0.5
        assert!((north_span - 2.0 * equator_span).abs() < 1e-9);
        assert!((north.max_lat - north.min_lat - (equator.max_lat - equator.min_lat)).abs() < 1e-12);
    }

    #[test]
    fn bounding_box_zero_radius_collapses_to_point() {
        let area = bounding_box(coord(21.0278, 105.8342), 0.0).unwrap();
        assert_eq!(area.min_lat, 21.0278);
        assert_eq!(area.max_lat, 21.0278);
        assert_eq!(area.min_lng, 105.8342);
        assert_eq!(area.max_lng, 105.8342);
    }

    #[test]
    fn bounding_box_rejects_bad_radius() {
        let centre = coord(0.0, 0.0);
        assert!(matches!(
            bounding_box(centre, -1.0),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            bounding_box(centre, f64::NAN),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            bounding_box(centre, f64::INFINITY),
            Err(GeometryError::InvalidRadius(_))
        ));
    }

    #[test]
    fn bounding_box_rejects_poles() {
        assert_eq!(
            bounding_box(coord(90.0, 0.0), 1.0),
            Err(GeometryError::PolarLatitude(90.0))
        );
        assert_eq!(
            bounding_box(coord(-90.0, 0.0), 1.0),
            Err(GeometryError::PolarLatitude(-90.0))
        );
        assert!(bounding_box(coord(89.9, 0.0), 1.0).is_ok());
    }

    #[test]
    fn bounding_box_lat_lng_validates_centre() {
        assert!(matches!(
            bounding_box_lat_lng(0.0, 200.0, 1.0),
            Err(GeometryError::Coordinate(CodecError::Range { .. }))
        ));
        assert!(bounding_box_lat_lng(10.0, 20.0, 1.0).is_ok());
    }

    #[test]
    fn estimate_length_point_query_is_max() {
        assert_eq!(estimate_length(0.0), MAX_LENGTH);
        assert_eq!(estimate_length(-3.0), MAX_LENGTH);
        assert_eq!(estimate_length(f64::NAN), MAX_LENGTH);
    }

    #[test]
    fn estimate_length_follows_doubling_rule() {
        // 15 doublings from 1 km reach 32768 km
        assert_eq!(estimate_length(1.0), 3);
        // ~25 doublings
        assert_eq!(estimate_length(0.001), 5);
        // ~35 doublings
        assert_eq!(estimate_length(0.000_001), 7);
    }

    #[test]
    fn estimate_length_clamps_large_radius() {
        assert_eq!(estimate_length(20_037.73), 1);
        assert_eq!(estimate_length(5_000.0), 1);
        assert_eq!(estimate_length(1e9), 1);
        assert_eq!(estimate_length(f64::INFINITY), 1);
    }

    #[test]
    fn estimate_length_clamps_tiny_radius() {
        assert_eq!(estimate_length(f64::MIN_POSITIVE), MAX_LENGTH);
    }

    #[test]
    fn estimate_length_never_grows_with_radius() {
        let mut previous = MAX_LENGTH;
        for exp in -12..6 {
            let len = estimate_length(10_f64.powi(exp));
            assert!(len <= previous);
            previous = len;
        }
    }

    #[test]
    fn distance_same_point_is_zero() {
        let p = coord(21.0278, 105.8342);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_one_degree_on_equator() {
        let d = distance(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((d - EARTH_RADIUS_KM * PI / 180.0).abs() < 1e-9);
    }

    #[test]
    fn distance_pole_to_pole_is_half_circumference() {
        let d = distance(coord(90.0, 0.0), coord(-90.0, 0.0));
        assert!((d - EARTH_RADIUS_KM * PI).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let hanoi = coord(21.0278, 105.8342);
        let paris = coord(48.8566, 2.3522);
        assert!((distance(hanoi, paris) - distance(paris, hanoi)).abs() < 1e-9);
        // ~9200 km
        assert!((9_000.0..9_400.0).contains(&distance(hanoi, paris)));
    }
}
