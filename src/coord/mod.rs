use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Valid positions have `latitude` in `[-90, 90]` and `longitude` in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both axes lie inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts to a `geo_types::Point` (x = longitude, y = latitude).
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        c.to_point()
    }
}

/// Trait for types that can provide a longitude/latitude pair.
///
/// Implemented for `(f64, f64)` tuples in `(longitude, latitude)` order,
/// `geo_types::Point<f64>`, `geo_types::Coord<f64>` and [`Coordinate`].
/// This allows functions to accept any of them.
pub trait LonLat {
    /// Returns the longitude (x).
    fn lon(&self) -> f64;
    /// Returns the latitude (y).
    fn lat(&self) -> f64;
}

impl LonLat for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl LonLat for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

impl LonLat for Coord<f64> {
    fn lon(&self) -> f64 {
        self.x
    }
    fn lat(&self) -> f64 {
        self.y
    }
}

impl LonLat for Coordinate {
    fn lon(&self) -> f64 {
        self.longitude
    }
    fn lat(&self) -> f64 {
        self.latitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_lonlat_tuple() {
        let tuple = (10.40744, 57.64911);
        assert_eq!(tuple.lon(), 10.40744);
        assert_eq!(tuple.lat(), 57.64911);
    }

    #[test]
    fn test_lonlat_point_and_coord() {
        let p = point! { x: 10.40744, y: 57.64911 };
        let c = coord! { x: 10.40744, y: 57.64911 };
        // Point has deprecated inherent lat/lng, so call through the trait
        assert_eq!(LonLat::lon(&p), 10.40744);
        assert_eq!(LonLat::lat(&p), 57.64911);
        assert_eq!(LonLat::lon(&c), 10.40744);
        assert_eq!(LonLat::lat(&c), 57.64911);
    }

    #[test]
    fn test_coordinate_to_point() {
        let c = Coordinate::new(57.64911, 10.40744);
        let p: Point<f64> = c.into();
        assert_eq!(p.x(), 10.40744);
        assert_eq!(p.y(), 57.64911);
        assert_eq!(c.lat(), 57.64911);
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 180.1).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_coordinate_serde() {
        let c = Coordinate::new(57.5, 10.25);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"latitude":57.5,"longitude":10.25}"#);
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
