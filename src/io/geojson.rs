use crate::cell::GeohashCell;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, feature::Id};
use serde_json::Value;

/// Trait for converting collections of [`GeohashCell`]s to GeoJSON.
///
/// Implemented for `[GeohashCell]` and `Vec<GeohashCell>`.
pub trait CellsToGeoJson {
    /// One Polygon feature per cell, with the hash as feature id and
    /// `geohash`, `precision`, `latitude`, `longitude` properties.
    fn to_feature_collection(&self) -> FeatureCollection;
    /// The feature collection serialized as a GeoJSON string.
    fn to_geojson_string(&self) -> String;
}

fn cell_to_feature(cell: &GeohashCell) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("geohash".to_string(), Value::from(cell.hash.as_str()));
    properties.insert("precision".to_string(), Value::from(cell.precision));
    properties.insert("latitude".to_string(), Value::from(cell.latitude()));
    properties.insert("longitude".to_string(), Value::from(cell.longitude()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new((&cell.to_polygon()).into())),
        id: Some(Id::String(cell.hash.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

impl CellsToGeoJson for [GeohashCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.iter().map(cell_to_feature).collect(),
            foreign_members: None,
        }
    }

    fn to_geojson_string(&self) -> String {
        GeoJson::from(self.to_feature_collection()).to_string()
    }
}

impl CellsToGeoJson for Vec<GeohashCell> {
    fn to_feature_collection(&self) -> FeatureCollection {
        self.as_slice().to_feature_collection()
    }

    fn to_geojson_string(&self) -> String {
        self.as_slice().to_geojson_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeohashError;

    #[test]
    fn test_cells_to_feature_collection() -> Result<(), GeohashError> {
        let cells = vec![
            GeohashCell::from_hash("u4pru")?,
            GeohashCell::from_hash("u4r2h")?,
        ];

        let fc = cells.to_feature_collection();
        assert_eq!(fc.features.len(), 2);

        let first = &fc.features[0];
        assert_eq!(first.id, Some(Id::String("u4pru".to_string())));
        assert_eq!(first.property("geohash"), Some(&Value::from("u4pru")));
        assert_eq!(first.property("precision"), Some(&Value::from(5)));
        assert!(matches!(
            first.geometry.as_ref().map(|g| &g.value),
            Some(geojson::Value::Polygon(_))
        ));
        Ok(())
    }

    #[test]
    fn test_geojson_string_parses_back() -> Result<(), GeohashError> {
        let cells = vec![GeohashCell::from_hash("u4pru")?];
        let text = cells.to_geojson_string();

        let parsed: GeoJson = text.parse().expect("valid GeoJSON");
        match parsed {
            GeoJson::FeatureCollection(fc) => {
                assert_eq!(fc.features.len(), 1);
                let polygon: geo_types::Polygon<f64> = fc.features[0]
                    .geometry
                    .clone()
                    .expect("geometry")
                    .try_into()
                    .expect("polygon");
                let expected = cells[0].to_polygon();
                assert_eq!(polygon.exterior().0.len(), expected.exterior().0.len());
                for (a, b) in polygon.exterior().0.iter().zip(&expected.exterior().0) {
                    assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
                }
            }
            other => panic!("expected a feature collection, got {other:?}"),
        }
        Ok(())
    }
}
