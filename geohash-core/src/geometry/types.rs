//! Geometry data types.

use serde::{Deserialize, Serialize};

use crate::codec::Coordinate;

/// An axis-aligned latitude/longitude rectangle around a search centre.
///
/// Fields are named rather than positional so that the `(min, max)` pairs
/// can never be read in the wrong order. Extremes are not clamped to the
/// geographic ranges: a box near the antimeridian may have
/// `max_lng > 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge in degrees.
    pub min_lat: f64,
    /// Northern edge in degrees.
    pub max_lat: f64,
    /// Western edge in degrees.
    pub min_lng: f64,
    /// Eastern edge in degrees.
    pub max_lng: f64,
}

impl BoundingBox {
    /// Returns true if `coord` lies inside the box, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_core::codec::Coordinate;
    /// use geohash_core::geometry::bounding_box;
    ///
    /// let centre = Coordinate::new(21.0278, 105.8342).unwrap();
    /// let area = bounding_box(centre, 10.0).unwrap();
    /// assert!(area.contains(centre));
    /// assert!(!area.contains(Coordinate::new(22.0, 105.8342).unwrap()));
    /// ```
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&coord.latitude())
            && (self.min_lng..=self.max_lng).contains(&coord.longitude())
    }

    /// Returns the centre of the box.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox {
            min_lat: -1.0,
            max_lat: 1.0,
            min_lng: 10.0,
            max_lng: 12.0,
        }
    }

    #[test]
    fn contains_includes_edges() {
        let area = unit_box();
        assert!(area.contains(Coordinate::new(-1.0, 10.0).unwrap()));
        assert!(area.contains(Coordinate::new(1.0, 12.0).unwrap()));
        assert!(area.contains(Coordinate::new(0.0, 11.0).unwrap()));
    }

    #[test]
    fn contains_rejects_outside_points() {
        let area = unit_box();
        assert!(!area.contains(Coordinate::new(1.5, 11.0).unwrap()));
        assert!(!area.contains(Coordinate::new(0.0, 9.9).unwrap()));
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(unit_box().center(), (0.0, 11.0));
    }

    #[test]
    fn json_uses_named_fields() {
        let json = serde_json::to_string(&unit_box()).unwrap();
        assert!(json.contains("\"min_lat\":-1.0"));
        assert!(json.contains("\"max_lng\":12.0"));
    }
}
