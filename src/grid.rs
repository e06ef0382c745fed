use crate::cell::GeohashCell;
use crate::coord::LonLat;
use crate::error::GeohashError;
use crate::index::constants::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::index::{Precision, bounds_of, encode};
use crate::io::geojson::CellsToGeoJson;
use geo::{BoundingRect, Intersects};
use geo_types::{Geometry, Polygon, Rect};
use geojson::FeatureCollection;

/// Every geohash cell of one precision that touches an extent.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeohashGrid, Precision};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let grid = GeohashGrid::builder()
///     .precision(Precision::Low)
///     .extent(10.0, 57.0, 11.0, 58.0)
///     .build()?;
///
/// let cell = grid.get_cell_at(&(10.40744, 57.64911)).expect("inside the extent");
/// assert_eq!(cell.hash, "u4p");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeohashGrid {
    cells: Vec<GeohashCell>,
    precision: usize,
}

impl GeohashGrid {
    pub fn builder() -> GeohashGridBuilder {
        GeohashGridBuilder::new()
    }

    /// Covers `[min_lon, max_lon] x [min_lat, max_lat]` with cells.
    ///
    /// Cells are ordered row by row from south to north, west to east within a row.
    ///
    /// # Errors
    ///
    /// - [`GeohashError::InvalidCoordinates`] - the extent is inverted or out of range,
    ///   or the precision is outside `1..=MAX_PRECISION`
    pub fn from_extent(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
        precision: impl Into<Precision>,
    ) -> Result<Self, GeohashError> {
        let precision = precision.into().checked_length()?;
        let cells = generate_cells_for_extent(min_lon, min_lat, max_lon, max_lat, precision)?;
        log::debug!(
            "generated {} cells at precision {} for extent ({}, {}) - ({}, {})",
            cells.len(),
            precision,
            min_lon,
            min_lat,
            max_lon,
            max_lat
        );
        Ok(Self { cells, precision })
    }

    pub fn from_rect(
        rect: &Rect<f64>,
        precision: impl Into<Precision>,
    ) -> Result<Self, GeohashError> {
        Self::from_extent(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            precision,
        )
    }

    /// Cells that intersect a longitude/latitude geometry.
    pub fn from_geometry(
        geometry: &Geometry<f64>,
        precision: impl Into<Precision>,
    ) -> Result<Self, GeohashError> {
        let rect = geometry.bounding_rect().ok_or_else(|| {
            GeohashError::InvalidCoordinates("geometry has no extent".to_string())
        })?;
        let mut grid = Self::from_rect(&rect, precision)?;
        grid.cells.retain(|cell| geometry.intersects(&cell.to_polygon()));
        log::debug!("{} cells intersect the geometry", grid.cells.len());
        Ok(grid)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GeohashCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeohashCell> {
        self.cells.iter()
    }

    pub fn get_cell_at(&self, coord: &impl LonLat) -> Option<&GeohashCell> {
        let hash = encode(coord.lat(), coord.lon(), self.precision).ok()?;
        self.cells.iter().find(|cell| cell.hash == hash)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        self.cells.to_feature_collection()
    }

    pub fn to_geojson_string(&self) -> String {
        self.cells.to_geojson_string()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GeohashCell>
    where
        F: Fn(&GeohashCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct GeohashGridBuilder {
    precision: Option<Precision>,
    min_lon: Option<f64>,
    min_lat: Option<f64>,
    max_lon: Option<f64>,
    max_lat: Option<f64>,
}

impl GeohashGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: impl Into<Precision>) -> Self {
        self.precision = Some(precision.into());
        self
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.min_lon = Some(min_lon);
        self.min_lat = Some(min_lat);
        self.max_lon = Some(max_lon);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lon = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lon = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    /// Builds the grid. Precision defaults to [`Precision::Medium`].
    pub fn build(self) -> Result<GeohashGrid, GeohashError> {
        let precision = self.precision.unwrap_or_default();
        match (self.min_lon, self.min_lat, self.max_lon, self.max_lat) {
            (Some(min_lon), Some(min_lat), Some(max_lon), Some(max_lat)) => {
                GeohashGrid::from_extent(min_lon, min_lat, max_lon, max_lat, precision)
            }
            _ => Err(GeohashError::InvalidCoordinates("extent must be set".to_string())),
        }
    }
}

fn generate_cells_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    precision: usize,
) -> Result<Vec<GeohashCell>, GeohashError> {
    if min_lon > max_lon || min_lat > max_lat {
        return Err(GeohashError::InvalidCoordinates(format!(
            "extent ({}, {}) - ({}, {}) is inverted",
            min_lon, min_lat, max_lon, max_lat
        )));
    }

    // validates both corners
    encode(max_lat, max_lon, precision)?;
    let origin = bounds_of(&encode(min_lat, min_lon, precision)?)?;
    let (cell_height, cell_width) = origin.delta();

    let mut cells = Vec::new();

    let mut row = 0usize;
    loop {
        let lower_lat = origin.lower.latitude + row as f64 * cell_height;
        if lower_lat > max_lat || lower_lat >= LATITUDE_RANGE[1] {
            break;
        }
        let center_lat = lower_lat + cell_height / 2.0;

        let mut col = 0usize;
        loop {
            let lower_lon = origin.lower.longitude + col as f64 * cell_width;
            if lower_lon > max_lon || lower_lon >= LONGITUDE_RANGE[1] {
                break;
            }
            let center_lon = lower_lon + cell_width / 2.0;

            let hash = encode(center_lat, center_lon, precision)?;
            cells.push(GeohashCell::from_hash(&hash)?);
            col += 1;
        }
        row += 1;
    }

    Ok(cells)
}
