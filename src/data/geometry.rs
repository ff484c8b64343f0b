//! Country boundary loading from a GeoJSON FeatureCollection
//!
//! Each feature must carry a `name` property; `continent` is optional.
//! Polygon features are promoted to single-member multipolygons so every
//! boundary has the same shape downstream.

use std::io::BufReader;
use std::path::Path;

use geo::{Geometry, MultiPolygon};
use geojson::{Feature, GeoJson};

use crate::error::{DashboardError, Result};
use crate::types::GeoRecord;

/// Continent used when a feature has no `continent` property
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// Load country boundaries from a GeoJSON file
pub fn load_geometry(path: &Path) -> Result<Vec<GeoRecord>> {
    let file = super::open_source(path)?;
    let geojson = GeoJson::from_reader(BufReader::new(file)).map_err(geojson::Error::from)?;
    let records = parse_geometry(geojson)?;
    tracing::debug!("Read {} boundaries from {}", records.len(), path.display());
    Ok(records)
}

/// Convert parsed GeoJSON into boundary records
pub fn parse_geometry(geojson: GeoJson) -> Result<Vec<GeoRecord>> {
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DashboardError::Dataset(
            "boundary file is not a FeatureCollection".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        if let Some(record) = feature_to_record(index, feature)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn feature_to_record(index: usize, feature: Feature) -> Result<Option<GeoRecord>> {
    let Some(name) = string_property(&feature, "name") else {
        tracing::warn!("Skipping boundary feature #{index}: no 'name' property");
        return Ok(None);
    };
    let continent =
        string_property(&feature, "continent").unwrap_or_else(|| UNKNOWN_CONTINENT.to_string());

    let Some(geometry) = feature.geometry else {
        tracing::warn!("Skipping boundary '{name}': no geometry");
        return Ok(None);
    };

    match Geometry::<f64>::try_from(geometry.value)? {
        Geometry::Polygon(polygon) => Ok(Some(GeoRecord::new(
            name,
            continent,
            MultiPolygon::new(vec![polygon]),
        ))),
        Geometry::MultiPolygon(multi) => Ok(Some(GeoRecord::new(name, continent, multi))),
        _ => {
            tracing::warn!("Skipping boundary '{name}': geometry is not areal");
            Ok(None)
        }
    }
}

fn string_property(feature: &Feature, key: &str) -> Option<String> {
    feature
        .property(key)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
