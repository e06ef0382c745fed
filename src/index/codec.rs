use crate::coord::Coordinate;
use crate::error::GeohashError;
use crate::index::alphabet::symbol_of;
use crate::index::bounds::bounds_of;
use crate::index::constants::{BITS_PER_SYMBOL, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::index::precision::Precision;

/// Encodes a latitude/longitude into a geohash of the requested length.
///
/// # Process
///
/// 1. Validates latitude against `[-90, 90]` and longitude against `[-180, 180]`
/// 2. Starts from the full latitude and longitude ranges
/// 3. Alternately bisects longitude and latitude (longitude first), writing a 1
///    bit when the coordinate is at or above the midpoint and a 0 otherwise
/// 4. Emits one alphabet symbol per five bits until the hash reaches `precision`
///
/// `precision` must lie in `1..=`[`MAX_PRECISION`](crate::MAX_PRECISION).
///
/// # Example
/// ```
/// use geohash_rs::{Precision, encode};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(encode(57.64911, 10.40744, Precision::default())?, "u4pru");
/// assert_eq!(encode(57.64911, 10.40744, Precision::High)?, "u4pruyd");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`GeohashError::InvalidCoordinates`] - an axis is out of range, or the precision is
///   outside `1..=MAX_PRECISION`
pub fn encode(
    latitude: f64,
    longitude: f64,
    precision: impl Into<Precision>,
) -> Result<String, GeohashError> {
    let precision = precision.into();

    if !(LATITUDE_RANGE[0]..=LATITUDE_RANGE[1]).contains(&latitude) {
        return Err(GeohashError::InvalidCoordinates(format!(
            "latitude {} is outside [-90, 90]",
            latitude
        )));
    }
    if !(LONGITUDE_RANGE[0]..=LONGITUDE_RANGE[1]).contains(&longitude) {
        return Err(GeohashError::InvalidCoordinates(format!(
            "longitude {} is outside [-180, 180]",
            longitude
        )));
    }
    let length = precision.checked_length()?;

    Ok(bisect(latitude, longitude, length))
}

/// Runs the bisection for an in-range coordinate. `length` is trusted, so
/// callers re-encoding an existing hash are not held to the maximum precision.
pub(crate) fn bisect(latitude: f64, longitude: f64, length: usize) -> String {
    let mut lat = LATITUDE_RANGE;
    let mut lon = LONGITUDE_RANGE;
    let mut lon_turn = true;

    let mut hash = String::with_capacity(length);
    let mut idx: u8 = 0;
    let mut bit = 0;

    while hash.len() < length {
        let (range, value) = if lon_turn {
            (&mut lon, longitude)
        } else {
            (&mut lat, latitude)
        };
        let mid = (range[0] + range[1]) / 2.0;
        idx <<= 1;
        if value >= mid {
            idx |= 1;
            range[0] = mid;
        } else {
            range[1] = mid;
        }
        lon_turn = !lon_turn;

        bit += 1;
        if bit == BITS_PER_SYMBOL {
            hash.push(symbol_of(idx));
            idx = 0;
            bit = 0;
        }
    }

    hash
}

/// Decodes a geohash to the center of the cell it denotes.
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let c = decode("u4pruydqqvj8pr9yc27rjr")?;
/// assert!((c.latitude - 57.64911).abs() < 0.001);
/// assert!((c.longitude - 10.40744).abs() < 0.001);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Same as [`bounds_of`].
pub fn decode(hash: &str) -> Result<Coordinate, GeohashError> {
    Ok(bounds_of(hash)?.center())
}
