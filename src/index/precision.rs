use crate::error::GeohashError;
use crate::index::constants::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Target geohash length.
///
/// The named levels are aliases for their integer length; `Custom(n)` gives any
/// other length. `Precision::default()` is [`Precision::Medium`] (5 symbols).
/// Equality and hashing go by length, so `Custom(5) == Medium`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Precision {
    /// 1 symbol (cells of roughly 5000 km)
    VeryLow,
    /// 3 symbols (roughly 156 km)
    Low,
    /// 5 symbols (roughly 4.9 km)
    #[default]
    Medium,
    /// 7 symbols (roughly 153 m)
    High,
    /// 9 symbols (roughly 4.8 m)
    VeryHigh,
    /// Any other length
    Custom(usize),
}

impl Precision {
    /// Number of symbols in a geohash at this precision.
    pub fn length(self) -> usize {
        match self {
            Precision::VeryLow => 1,
            Precision::Low => 3,
            Precision::Medium => DEFAULT_PRECISION,
            Precision::High => 7,
            Precision::VeryHigh => 9,
            Precision::Custom(n) => n,
        }
    }

    /// The length, if it lies in `1..=MAX_PRECISION`.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidCoordinates`] - the length is zero or above [`MAX_PRECISION`]
    pub fn checked_length(self) -> Result<usize, GeohashError> {
        match self.length() {
            0 => Err(GeohashError::InvalidCoordinates(
                "precision must be at least 1".to_string(),
            )),
            n if n > MAX_PRECISION => Err(GeohashError::InvalidCoordinates(format!(
                "precision {} is above the maximum of {}",
                n, MAX_PRECISION
            ))),
            n => Ok(n),
        }
    }
}

impl PartialEq for Precision {
    fn eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }
}

impl Eq for Precision {}

impl Hash for Precision {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length().hash(state);
    }
}

impl From<usize> for Precision {
    fn from(n: usize) -> Self {
        match n {
            1 => Precision::VeryLow,
            3 => Precision::Low,
            5 => Precision::Medium,
            7 => Precision::High,
            9 => Precision::VeryHigh,
            n => Precision::Custom(n),
        }
    }
}

impl From<Precision> for usize {
    fn from(p: Precision) -> Self {
        p.length()
    }
}
