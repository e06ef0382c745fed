use crate::error::GeohashError;
use crate::index::bounds::bounds_of;
use crate::index::codec::bisect;
use crate::index::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::index::direction::Direction;

/// Returns the geohash of the adjacent cell in `direction`, at the same length.
///
/// The neighbour is found by shifting the cell center by one full cell
/// height/width and re-encoding. Longitudes past the antimeridian wrap around;
/// latitudes past a pole are clamped, so the northern neighbour of a top-row
/// cell is the cell itself.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, neighbor};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// assert_eq!(neighbor("u4pru", Direction::North)?, "u4r2h");
/// # Ok(())
/// # }
/// ```
pub fn neighbor(hash: &str, direction: Direction) -> Result<String, GeohashError> {
    let bounds = bounds_of(hash)?;
    let center = bounds.center();
    let (d_lat, d_lon) = bounds.delta();
    let (m_lat, m_lon) = direction.multiplier();

    let lat = center.latitude + d_lat * m_lat;
    let lon = center.longitude + d_lon * m_lon;

    // any decodable hash has a neighbour, even one longer than MAX_PRECISION
    Ok(bisect(
        clamp_latitude(lat),
        wrap_longitude(lon),
        hash.chars().count(),
    ))
}

/// Returns the eight neighbours of `hash` clockwise from north
/// (`N, NE, E, SE, S, SW, W, NW`), followed by `hash` itself when
/// `include_center` is set.
///
/// # Example
/// ```
/// use geohash_rs::neighbors;
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let around = neighbors("u4pru", false)?;
/// assert_eq!(around, ["u4r2h", "u4r2j", "u4prv", "u4prt", "u4prs", "u4pre", "u4prg", "u4r25"]);
///
/// let with_center = neighbors("u4pru", true)?;
/// assert_eq!(with_center.len(), 9);
/// assert_eq!(with_center[8], "u4pru");
/// # Ok(())
/// # }
/// ```
pub fn neighbors(hash: &str, include_center: bool) -> Result<Vec<String>, GeohashError> {
    let mut out = Vec::with_capacity(if include_center { 9 } else { 8 });
    for direction in Direction::ALL {
        out.push(neighbor(hash, direction)?);
    }
    if include_center {
        out.push(hash.to_string());
    }
    Ok(out)
}

fn clamp_latitude(lat: f64) -> f64 {
    if lat > LATITUDE_RANGE[1] || lat < LATITUDE_RANGE[0] {
        log::trace!("neighbour latitude {} clamped to the pole", lat);
    }
    lat.clamp(LATITUDE_RANGE[0], LATITUDE_RANGE[1])
}

fn wrap_longitude(lon: f64) -> f64 {
    if (LONGITUDE_RANGE[0]..=LONGITUDE_RANGE[1]).contains(&lon) {
        return lon;
    }
    let span = LONGITUDE_RANGE[1] - LONGITUDE_RANGE[0];
    let wrapped = (lon - LONGITUDE_RANGE[0]).rem_euclid(span) + LONGITUDE_RANGE[0];
    log::trace!("neighbour longitude {} wrapped to {}", lon, wrapped);
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::codec::{decode, encode};
    use crate::index::constants::MAX_PRECISION;
    use crate::index::precision::Precision;
    use proptest::prelude::*;

    #[test]
    fn test_north_neighbor() -> Result<(), GeohashError> {
        assert_eq!(neighbor("u4pru", Direction::North)?, "u4r2h");
        Ok(())
    }

    #[test]
    fn test_neighbors_clockwise() -> Result<(), GeohashError> {
        let n = neighbors("u4pru", false)?;
        assert_eq!(
            n,
            vec!["u4r2h", "u4r2j", "u4prv", "u4prt", "u4prs", "u4pre", "u4prg", "u4r25"]
        );
        Ok(())
    }

    #[test]
    fn test_neighbors_with_center() -> Result<(), GeohashError> {
        let n = neighbors("u4pru", true)?;
        assert_eq!(
            n,
            vec![
                "u4r2h", "u4r2j", "u4prv", "u4prt", "u4prs", "u4pre", "u4prg", "u4r25", "u4pru"
            ]
        );
        Ok(())
    }

    #[test]
    fn test_neighbors_across_prime_meridian_and_equator_blocks() -> Result<(), GeohashError> {
        let n = neighbors("u0000", false)?;
        assert_eq!(
            n,
            vec!["u0002", "u0003", "u0001", "spbpc", "spbpb", "ezzzz", "gbpbp", "gbpbr"]
        );
        Ok(())
    }

    #[test]
    fn test_antimeridian_wraps() -> Result<(), GeohashError> {
        // eastern edge of the world, just north of the equator
        let east_edge = encode(1.0, 179.99, Precision::Medium)?;
        let across = neighbor(&east_edge, Direction::East)?;
        let c = decode(&across)?;
        assert!(c.longitude < -179.0);
        assert!((c.latitude - decode(&east_edge)?.latitude).abs() < 1e-9);

        let back = neighbor(&across, Direction::West)?;
        assert_eq!(back, east_edge);
        Ok(())
    }

    #[test]
    fn test_pole_clamps_to_self() -> Result<(), GeohashError> {
        let top = encode(89.99, 10.0, Precision::Low)?;
        assert_eq!(neighbor(&top, Direction::North)?, top);

        let bottom = encode(-89.99, 10.0, Precision::Low)?;
        assert_eq!(neighbor(&bottom, Direction::South)?, bottom);
        Ok(())
    }

    #[test]
    fn test_neighbor_errors() {
        assert_eq!(neighbor("", Direction::North), Err(GeohashError::EmptyInput));
        assert_eq!(neighbors("", false), Err(GeohashError::EmptyInput));
        assert_eq!(neighbors("", true), Err(GeohashError::EmptyInput));
        assert_eq!(
            neighbor("u4pro", Direction::East),
            Err(GeohashError::InvalidCharacters('o'))
        );
        assert_eq!(
            neighbors("i", false),
            Err(GeohashError::InvalidCharacters('i'))
        );
    }

    #[test]
    fn test_neighbor_of_hash_longer_than_max_precision() -> Result<(), GeohashError> {
        let long = "u4pruydqqvj8pr";
        assert!(long.len() > MAX_PRECISION);

        let around = neighbors(long, false)?;
        assert_eq!(around.len(), 8);
        for n in &around {
            assert_eq!(n.len(), long.len());
            assert_ne!(n, long);
        }
        assert_eq!(neighbor(&around[0], Direction::South)?, long);
        Ok(())
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(10.0), 10.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert!((wrap_longitude(181.0) - -179.0).abs() < 1e-9);
        assert!((wrap_longitude(-181.0) - 179.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn opposite_neighbor_returns_home(
            lat in -80.0f64..80.0,
            lon in -180.0f64..=180.0,
            p in 1usize..=9,
            d in 0usize..8,
        ) {
            // keep away from the poles where clamping breaks symmetry
            let hash = encode(lat, lon, p).unwrap();
            let (h, _) = crate::index::bounds::cell_dimensions(p).unwrap();
            let c = decode(&hash).unwrap();
            prop_assume!(c.latitude + 1.5 * h < 90.0 && c.latitude - 1.5 * h > -90.0);

            let direction = Direction::ALL[d];
            let there = neighbor(&hash, direction).unwrap();
            prop_assert_eq!(there.len(), hash.len());
            prop_assert_ne!(&there, &hash);
            let back = neighbor(&there, direction.opposite()).unwrap();
            prop_assert_eq!(back, hash);
        }
    }
}
