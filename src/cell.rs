use crate::coord::LonLat;
use crate::error::GeohashError;
use crate::index::{
    BoundingBox, Direction, Precision, bounds_of, cell_dimensions, encode, neighbor, symbol_of,
};
use geo_types::{LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single geohash cell.
///
/// Each `GeohashCell` carries its hash, the bounding box it denotes and that
/// box's center in WGS84 longitude/latitude.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeohashCell, Precision};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// // (longitude, latitude)
/// let cell = GeohashCell::from_coord(&(10.40744, 57.64911), Precision::Medium)?;
/// assert_eq!(cell.hash, "u4pru");
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeohashCell {
    /// The geohash string
    pub hash: String,
    /// Center point (x = longitude, y = latitude)
    pub center: Point<f64>,
    /// Extent of the cell
    pub bounds: BoundingBox,
    /// Number of symbols in `hash`
    pub precision: usize,
}

impl GeohashCell {
    /// Create a GeohashCell from an existing geohash string
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeohashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeohashError> {
    /// let cell = GeohashCell::from_hash("u4pru")?;
    /// assert_eq!(cell.precision, 5);
    /// assert!((cell.latitude() - 57.65).abs() < 0.05);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeohashError> {
        let bounds = bounds_of(hash)?;

        Ok(Self {
            hash: hash.to_string(),
            center: bounds.center().to_point(),
            bounds,
            precision: hash.chars().count(),
        })
    }

    /// Create the GeohashCell containing a longitude/latitude position
    ///
    /// Accepts `(lon, lat)` tuples, `geo_types::Point`, `geo_types::Coord`
    /// and [`Coordinate`](crate::Coordinate).
    pub fn from_coord(
        coord: &impl LonLat,
        precision: impl Into<Precision>,
    ) -> Result<Self, GeohashError> {
        let hash = encode(coord.lat(), coord.lon(), precision)?;
        Self::from_hash(&hash)
    }

    /// Create GeohashCells along a LineString of longitude/latitude positions.
    ///
    /// Samples points along the line at half the cell size and returns every
    /// unique cell it passes through, in order of first visit.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidCoordinates`] - a vertex is out of range, or the
    ///   precision is outside `1..=MAX_PRECISION`
    pub fn from_line_string(
        line: &LineString,
        precision: impl Into<Precision>,
    ) -> Result<Vec<Self>, GeohashError> {
        let precision = precision.into();
        let (cell_height, cell_width) = cell_dimensions(precision)?;
        let step_size = cell_height.min(cell_width) * 0.5;

        let mut seen: HashSet<String> = HashSet::new();
        let mut cells: Vec<GeohashCell> = Vec::new();

        for window in line.0.windows(2) {
            let start = &window[0];
            let end = &window[1];

            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let segment_length = (dx * dx + dy * dy).sqrt();
            let steps = (segment_length / step_size).ceil() as usize;

            for i in 0..=steps {
                let t = if steps == 0 {
                    0.0
                } else {
                    i as f64 / steps as f64
                };
                let hash = encode(start.y + t * dy, start.x + t * dx, precision)?;

                if !seen.contains(&hash) {
                    cells.push(Self::from_hash(&hash)?);
                    seen.insert(hash);
                }
            }
        }

        Ok(cells)
    }

    /// Returns the latitude of the cell center.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell center.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Returns `true` when the position falls inside this cell.
    pub fn contains(&self, coord: &impl LonLat) -> bool {
        self.bounds.contains(coord)
    }

    /// The adjacent cell in `direction`.
    pub fn neighbor(&self, direction: Direction) -> Result<Self, GeohashError> {
        Self::from_hash(&neighbor(&self.hash, direction)?)
    }

    /// The eight adjacent cells clockwise from north, plus this cell when
    /// `include_center` is set.
    pub fn neighbors(&self, include_center: bool) -> Result<Vec<Self>, GeohashError> {
        let mut cells = Vec::with_capacity(9);
        for direction in Direction::ALL {
            cells.push(self.neighbor(direction)?);
        }
        if include_center {
            cells.push(self.clone());
        }
        Ok(cells)
    }

    /// The enclosing cell one symbol shorter, or `None` at precision 1.
    pub fn parent(&self) -> Option<Self> {
        let (cut, _) = self.hash.char_indices().last()?;
        if cut == 0 {
            return None;
        }
        Self::from_hash(&self.hash[..cut]).ok()
    }

    /// The 32 cells one symbol longer, in alphabet order.
    pub fn children(&self) -> Result<Vec<Self>, GeohashError> {
        (0..32u8)
            .map(|i| {
                let mut hash = String::with_capacity(self.hash.len() + 1);
                hash.push_str(&self.hash);
                hash.push(symbol_of(i));
                Self::from_hash(&hash)
            })
            .collect()
    }

    /// Returns the cell extent as a `geo_types::Rect`.
    pub fn to_rect(&self) -> Rect<f64> {
        self.bounds.to_rect()
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds.to_polygon()
    }
}
