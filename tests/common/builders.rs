//! Test data builders for creating test datasets

use std::path::{Path, PathBuf};

use geo::{polygon, MultiPolygon};
use serde_json::json;
use tempfile::TempDir;
use tfr_dashboard::config::DataConfig;
use tfr_dashboard::{GeoRecord, Indicator, IndicatorRecord};

/// Builder for creating test indicator rows
pub struct RowBuilder {
    record: IndicatorRecord,
}

impl RowBuilder {
    pub fn new(country: &str, year: i32) -> Self {
        Self {
            record: IndicatorRecord::new(country, year),
        }
    }

    pub fn tfr(mut self, tfr: f64) -> Self {
        self.record.tfr = Some(tfr);
        self
    }

    pub fn avg_gdp(mut self, avg_gdp: f64) -> Self {
        self.record.avg_gdp = Some(avg_gdp);
        self
    }

    pub fn population_density(mut self, density: f64) -> Self {
        self.record.population_density = Some(density);
        self
    }

    pub fn gini(mut self, gini: f64) -> Self {
        self.record.gini = Some(gini);
        self
    }

    pub fn tfr_diff(mut self, diff: f64) -> Self {
        self.record.tfr_diff = Some(diff);
        self
    }

    pub fn build(self) -> IndicatorRecord {
        self.record.normalize()
    }
}

/// A unit-less square boundary with its lower-left corner at `(x, y)`
pub fn square(name: &str, continent: &str, x: f64, y: f64) -> GeoRecord {
    let p = polygon![
        (x: x, y: y),
        (x: x + 5.0, y: y),
        (x: x + 5.0, y: y + 5.0),
        (x: x, y: y + 5.0),
    ];
    GeoRecord::new(name, continent, MultiPolygon::new(vec![p]))
}

/// Four countries on the map, one without a boundary, one without indicators
///
/// | country   | continent | 1970 | 2020 | diff | avg GDP 2020 |
/// |-----------|-----------|------|------|------|--------------|
/// | Northland | Europe    | 2.5  | 1.5  | -1.0 | 40000        |
/// | Southland | Africa    | 7.0  | 5.5  | -1.5 | 1500         |
/// | Eastland  | Asia      | 5.0  | 1.0  | -4.0 | 30000        |
/// | Westland  | Americas  | 2.0  | 2.5  | +0.5 | 8000         |
/// | Islandia  | (none)    | 3.0  | 2.0  | -1.0 | 5000         |
pub fn sample_indicators() -> Vec<IndicatorRecord> {
    vec![
        RowBuilder::new("Northland", 1970).tfr(2.5).build(),
        RowBuilder::new("Northland", 2020)
            .tfr(1.5)
            .avg_gdp(40000.0)
            .population_density(120.0)
            .gini(30.0)
            .tfr_diff(-1.0)
            .build(),
        RowBuilder::new("Southland", 1970).tfr(7.0).build(),
        RowBuilder::new("Southland", 2020)
            .tfr(5.5)
            .avg_gdp(1500.0)
            .population_density(40.0)
            .gini(45.0)
            .tfr_diff(-1.5)
            .build(),
        RowBuilder::new("Eastland", 1970).tfr(5.0).build(),
        RowBuilder::new("Eastland", 2020)
            .tfr(1.0)
            .avg_gdp(30000.0)
            .population_density(500.0)
            .gini(33.0)
            .tfr_diff(-4.0)
            .build(),
        RowBuilder::new("Westland", 1970).tfr(2.0).build(),
        RowBuilder::new("Westland", 2020)
            .tfr(2.5)
            .avg_gdp(8000.0)
            .population_density(25.0)
            .tfr_diff(0.5)
            .build(),
        RowBuilder::new("Islandia", 1970).tfr(3.0).build(),
        RowBuilder::new("Islandia", 2020)
            .tfr(2.0)
            .avg_gdp(5000.0)
            .tfr_diff(-1.0)
            .build(),
    ]
}

pub fn sample_geometry() -> Vec<GeoRecord> {
    vec![
        square("Northland", "Europe", 0.0, 0.0),
        square("Southland", "Africa", 10.0, 0.0),
        square("Eastland", "Asia", 20.0, 0.0),
        square("Westland", "Americas", 30.0, 0.0),
        square("Nowhere", "Oceania", 40.0, 0.0),
    ]
}

/// Write indicator rows as CSV in the column layout of the World Bank export
pub fn write_indicator_csv(path: &Path, rows: &[IndicatorRecord]) {
    let mut writer = csv::Writer::from_path(path).unwrap();

    let mut header = vec!["country".to_string(), "date".to_string()];
    header.extend(Indicator::all().iter().map(|i| i.column().to_string()));
    writer.write_record(&header).unwrap();

    for row in rows {
        let mut record = vec![row.country.clone(), row.year.to_string()];
        record.extend(
            Indicator::all()
                .iter()
                .map(|i| row.get(*i).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record).unwrap();
    }
    writer.flush().unwrap();
}

/// Write boundaries as a GeoJSON FeatureCollection of polygons
pub fn write_geometry_geojson(path: &Path, records: &[GeoRecord]) {
    let features: Vec<_> = records
        .iter()
        .map(|r| {
            let polygons: Vec<_> = r
                .boundary
                .0
                .iter()
                .map(|p| {
                    let ring: Vec<[f64; 2]> = p.exterior().coords().map(|c| [c.x, c.y]).collect();
                    vec![ring]
                })
                .collect();
            json!({
                "type": "Feature",
                "properties": {"name": r.name, "continent": r.continent},
                "geometry": {"type": "MultiPolygon", "coordinates": polygons},
            })
        })
        .collect();

    let collection = json!({"type": "FeatureCollection", "features": features});
    std::fs::write(path, serde_json::to_string_pretty(&collection).unwrap()).unwrap();
}

/// Sample dataset written to a temporary directory
pub struct DatasetFiles {
    pub dir: TempDir,
    pub config: DataConfig,
}

impl DatasetFiles {
    pub fn sample() -> Self {
        Self::write(&sample_geometry(), &sample_indicators())
    }

    pub fn write(geometry: &[GeoRecord], indicators: &[IndicatorRecord]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig {
            indicators: dir.path().join("tfr_dataset.csv"),
            geometry: dir.path().join("world.geojson"),
        };
        write_indicator_csv(&config.indicators, indicators);
        write_geometry_geojson(&config.geometry, geometry);
        Self { dir, config }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
