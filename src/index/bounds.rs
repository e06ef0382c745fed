use crate::coord::{Coordinate, LonLat};
use crate::error::GeohashError;
use crate::index::alphabet::index_of;
use crate::index::constants::{BITS_PER_SYMBOL, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::index::precision::Precision;
use geo_types::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangular latitude/longitude cell a geohash denotes.
///
/// `lower` holds the southern latitude and western longitude, `upper` the
/// northern latitude and eastern longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lower: Coordinate,
    pub upper: Coordinate,
}

impl BoundingBox {
    /// The midpoint of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.upper.latitude + self.lower.latitude) / 2.0,
            (self.upper.longitude + self.lower.longitude) / 2.0,
        )
    }

    /// Full height and width of the box as `(latitude_span, longitude_span)`.
    pub fn delta(&self) -> (f64, f64) {
        (
            self.upper.latitude - self.lower.latitude,
            self.upper.longitude - self.lower.longitude,
        )
    }

    /// Returns `true` when the point falls inside this cell.
    ///
    /// Lower edges are inclusive and upper edges exclusive, so every point on
    /// the globe belongs to exactly one cell per precision. The northern and
    /// eastern edges of the world (90 and 180) are inclusive.
    pub fn contains(&self, point: &impl LonLat) -> bool {
        let (lat, lon) = (point.lat(), point.lon());
        let lat_ok = lat >= self.lower.latitude
            && (lat < self.upper.latitude
                || (self.upper.latitude == LATITUDE_RANGE[1] && lat == LATITUDE_RANGE[1]));
        let lon_ok = lon >= self.lower.longitude
            && (lon < self.upper.longitude
                || (self.upper.longitude == LONGITUDE_RANGE[1] && lon == LONGITUDE_RANGE[1]));
        lat_ok && lon_ok
    }

    /// Returns `true` when `other` lies entirely within this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.lower.latitude >= self.lower.latitude
            && other.lower.longitude >= self.lower.longitude
            && other.upper.latitude <= self.upper.latitude
            && other.upper.longitude <= self.upper.longitude
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lower.longitude, y: self.lower.latitude },
            coord! { x: self.upper.longitude, y: self.upper.latitude },
        )
    }

    /// Converts to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

/// Recovers the bounding box a geohash denotes.
///
/// Each symbol contributes five bits, most significant first. Bits alternate
/// between longitude and latitude starting with longitude; a set bit keeps the
/// upper half of the current range, a clear bit the lower half.
///
/// # Example
/// ```
/// use geohash_rs::bounds_of;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let bounds = bounds_of("u4pruydqq")?;
/// assert!((bounds.lower.latitude - 57.64908).abs() < 0.001);
/// assert!((bounds.upper.longitude - 10.40744).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::EmptyInput`] - `hash` is empty
/// - [`GeohashError::InvalidCharacters`] - a symbol is outside the alphabet
pub fn bounds_of(hash: &str) -> Result<BoundingBox, GeohashError> {
    if hash.is_empty() {
        return Err(GeohashError::EmptyInput);
    }

    let mut lat = LATITUDE_RANGE;
    let mut lon = LONGITUDE_RANGE;
    let mut lon_turn = true;

    for c in hash.chars() {
        let idx = index_of(c).ok_or(GeohashError::InvalidCharacters(c))?;

        for shift in (0..BITS_PER_SYMBOL).rev() {
            let bit = (idx >> shift) & 1;
            let range = if lon_turn { &mut lon } else { &mut lat };
            let mid = (range[0] + range[1]) / 2.0;
            if bit == 1 {
                range[0] = mid;
            } else {
                range[1] = mid;
            }
            lon_turn = !lon_turn;
        }
    }

    Ok(BoundingBox {
        lower: Coordinate::new(lat[0], lon[0]),
        upper: Coordinate::new(lat[1], lon[1]),
    })
}

/// Returns the `(latitude_height, longitude_width)` of every cell at a given length.
///
/// A geohash of `p` symbols spends `⌈5p/2⌉` bits on longitude and `⌊5p/2⌋` on latitude.
///
/// # Errors
///
/// - [`GeohashError::InvalidCoordinates`] - `precision` is outside `1..=MAX_PRECISION`
pub fn cell_dimensions(precision: impl Into<Precision>) -> Result<(f64, f64), GeohashError> {
    let bits = precision.into().checked_length()? * BITS_PER_SYMBOL;
    let lat_bits = (bits / 2) as i32;
    let lon_bits = bits.div_ceil(2) as i32;

    let lat_height = (LATITUDE_RANGE[1] - LATITUDE_RANGE[0]) / 2f64.powi(lat_bits);
    let lon_width = (LONGITUDE_RANGE[1] - LONGITUDE_RANGE[0]) / 2f64.powi(lon_bits);
    Ok((lat_height, lon_width))
}
