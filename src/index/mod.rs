pub mod constants;
mod alphabet;
mod bounds;
mod codec;
mod direction;
mod neighbors;
mod precision;

pub use alphabet::{index_of, symbol_of};
pub use bounds::{BoundingBox, bounds_of, cell_dimensions};
pub use codec::{decode, encode};
pub use constants::{BASE32, DEFAULT_PRECISION, MAX_PRECISION};
pub use direction::Direction;
pub use neighbors::{neighbor, neighbors};
pub use precision::Precision;
