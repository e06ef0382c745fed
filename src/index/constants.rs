/// The Geohash base-32 alphabet: digits and lowercase letters without `a`, `i`, `l`, `o`.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bits carried by each geohash symbol
pub const BITS_PER_SYMBOL: usize = 5;

/// Latitude range [min, max]
pub const LATITUDE_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude range [min, max]
pub const LONGITUDE_RANGE: [f64; 2] = [-180.0, 180.0];

/// Default geohash length
pub const DEFAULT_PRECISION: usize = 5;

/// Longest geohash `encode` will produce (cells of roughly 3.7 cm by 1.9 cm)
pub const MAX_PRECISION: usize = 12;
