//! # geohash-rs
//!
//! Geohash encoding: a reversible mapping between a latitude/longitude and a
//! base-32 string whose length sets the precision.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Encode, Decode, Bounds, Neighbours
//!
//! ```
//! use geohash_rs::{Direction, Precision, bounds_of, decode, encode, neighbor, neighbors};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let hash = encode(57.64911, 10.40744, Precision::default())?;
//! assert_eq!(hash, "u4pru");
//!
//! let center = decode(&hash)?;
//! let bounds = bounds_of(&hash)?;
//! assert!(bounds.contains(&(center.longitude, center.latitude)));
//!
//! assert_eq!(neighbor(&hash, Direction::North)?, "u4r2h");
//! assert_eq!(neighbors(&hash, true)?.len(), 9);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeohashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::{GeohashCell, Precision};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cell = GeohashCell::from_coord(&(10.40744, 57.64911), Precision::High)?;
//! println!("{}", cell.hash);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `GeohashGrid` - Collections of Cells
//!
//! ```
//! use geohash_rs::{GeohashGrid, Precision};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let grid = GeohashGrid::builder()
//!     .precision(Precision::Medium)
//!     .extent(10.0, 57.0, 10.5, 57.5)
//!     .build()?;
//!
//! if let Some(cell) = grid.get_cell_at(&(10.25, 57.25)) {
//!     println!("{}", cell.hash);
//! }
//! let geojson = grid.to_geojson_string();
//! # Ok(())
//! # }
//! ```
//!

pub mod batch;
pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod index;
pub mod io;

pub use batch::{decode_batch, encode_batch};
pub use cell::GeohashCell;
pub use coord::{Coordinate, LonLat};
pub use error::GeohashError;
pub use grid::{GeohashGrid, GeohashGridBuilder};
pub use index::{
    BASE32, BoundingBox, DEFAULT_PRECISION, Direction, MAX_PRECISION, Precision, bounds_of,
    cell_dimensions, decode, encode, index_of, neighbor, neighbors, symbol_of,
};
pub use io::CellsToGeoJson;

pub use geo_types;
pub use geojson;
