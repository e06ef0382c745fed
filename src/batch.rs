use crate::coord::{Coordinate, LonLat};
use crate::error::GeohashError;
use crate::index::{Precision, decode, encode};
use rayon::prelude::*;

/// Encodes many positions in parallel.
///
/// Output order matches input order. If any position is invalid the first
/// failing one (in input order) is returned as the error.
///
/// # Example
/// ```
/// use geohash_rs::{Precision, encode_batch};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let points = [(10.40744, 57.64911), (-0.1276, 51.5072)];
/// let hashes = encode_batch(&points, Precision::Medium)?;
/// assert_eq!(hashes[0], "u4pru");
/// # Ok(())
/// # }
/// ```
pub fn encode_batch<C>(
    coords: &[C],
    precision: impl Into<Precision>,
) -> Result<Vec<String>, GeohashError>
where
    C: LonLat + Sync,
{
    let precision = precision.into();
    let results: Vec<Result<String, GeohashError>> = coords
        .par_iter()
        .map(|c| encode(c.lat(), c.lon(), precision))
        .collect();
    results.into_iter().collect()
}

/// Decodes many geohashes in parallel to their cell centers.
pub fn decode_batch<S>(hashes: &[S]) -> Result<Vec<Coordinate>, GeohashError>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Result<Coordinate, GeohashError>> =
        hashes.par_iter().map(|h| decode(h.as_ref())).collect();
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_encode_batch_matches_sequential() -> Result<(), GeohashError> {
        let points: Vec<Point<f64>> = (0..500)
            .map(|i| Point::new(-179.0 + i as f64 * 0.7, -89.0 + i as f64 * 0.35))
            .collect();

        let batch = encode_batch(&points, Precision::High)?;
        assert_eq!(batch.len(), points.len());
        for (p, hash) in points.iter().zip(&batch) {
            assert_eq!(hash, &encode(p.y(), p.x(), Precision::High)?);
        }
        Ok(())
    }

    #[test]
    fn test_encode_batch_reports_first_error() {
        let points = [(10.0, 57.0), (10.0, 95.0), (200.0, 0.0)];
        let result = encode_batch(&points, Precision::Medium);
        match result {
            Err(GeohashError::InvalidCoordinates(msg)) => assert!(msg.contains("latitude")),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_decode_batch() -> Result<(), GeohashError> {
        let coords = decode_batch(&["u4pru", "gcpvj"])?;
        assert_eq!(coords.len(), 2);
        assert!((coords[0].latitude - 57.65).abs() < 0.05);
        assert!((coords[1].latitude - 51.5).abs() < 0.1);

        let owned = vec!["u4pru".to_string(), String::new()];
        assert_eq!(decode_batch(&owned), Err(GeohashError::EmptyInput));
        Ok(())
    }
}
