//! Dataset loading and the merged in-memory tables
//!
//! The [`Dataset`] holds the three tables every chart reads from:
//!
//! - the boundary table loaded from GeoJSON ([`load_geometry`])
//! - the indicator table loaded from CSV ([`load_indicators`])
//! - their inner join on country name ([`merge`])
//!
//! It is built once at startup and never mutated afterwards; the frontend
//! keeps it behind an `Arc` and hands `&Dataset` to every chart builder.

pub mod geometry;
pub mod indicators;
pub mod merge;

pub use geometry::{load_geometry, parse_geometry};
pub use indicators::{load_indicators, read_indicators};
pub use merge::{merge, JoinOutcome};

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use crate::config::DataConfig;
use crate::error::{DashboardError, Result, ResultExt};
use crate::types::{GeoRecord, IndicatorRecord, MergedRecord, FIRST_YEAR, LAST_YEAR};

/// Tolerance used when checking the precomputed `tfr_diff` column at load time
pub const TFR_DIFF_TOLERANCE: f64 = 1e-6;

/// Open a dataset file, mapping "not found" to a dedicated error
pub(crate) fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DashboardError::MissingFile(path.to_path_buf()),
        _ => DashboardError::Io(e),
    })
}

/// A country whose given `tfr_diff` disagrees with its recomputed change
#[derive(Debug, Clone, PartialEq)]
pub struct DiffMismatch {
    pub country: String,
    pub given: f64,
    pub recomputed: f64,
}

/// Row and country counts shown in the overview and status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub boundaries: usize,
    pub indicator_rows: usize,
    pub indicator_countries: usize,
    pub merged_rows: usize,
    pub merged_countries: usize,
    pub unmatched_countries: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

/// The loaded, read-only tables
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    geometry: Vec<GeoRecord>,
    indicators: Vec<IndicatorRecord>,
    merged: Vec<MergedRecord>,
    unmatched_countries: Vec<String>,
}

impl Dataset {
    /// Load both sources and join them
    pub fn load(sources: &DataConfig) -> Result<Self> {
        let geometry = load_geometry(&sources.geometry)
            .with_context(|| format!("Loading boundaries from {}", sources.geometry.display()))?;
        let indicators = load_indicators(&sources.indicators)
            .with_context(|| format!("Loading indicators from {}", sources.indicators.display()))?;

        let dataset = Self::from_tables(geometry, indicators);
        let summary = dataset.summary();
        tracing::info!(
            "Loaded {} boundaries and {} indicator rows; {} merged rows for {} countries",
            summary.boundaries,
            summary.indicator_rows,
            summary.merged_rows,
            summary.merged_countries
        );
        if summary.merged_rows == 0 {
            tracing::warn!("No indicator country matched a boundary name; maps will be empty");
        }

        let mismatches = dataset.diff_mismatches(TFR_DIFF_TOLERANCE);
        if !mismatches.is_empty() {
            tracing::warn!(
                "{} countries have a tfr_diff that differs from tfr({LAST_YEAR}) - tfr({FIRST_YEAR})",
                mismatches.len()
            );
            for m in &mismatches {
                tracing::debug!(
                    "{}: given {:.3}, recomputed {:.3}",
                    m.country,
                    m.given,
                    m.recomputed
                );
            }
        }

        Ok(dataset)
    }

    /// Build a dataset from already loaded tables
    pub fn from_tables(geometry: Vec<GeoRecord>, indicators: Vec<IndicatorRecord>) -> Self {
        let JoinOutcome {
            merged,
            unmatched_countries,
            ..
        } = merge(&geometry, &indicators);

        Self {
            geometry,
            indicators,
            merged,
            unmatched_countries,
        }
    }

    pub fn geometry(&self) -> &[GeoRecord] {
        &self.geometry
    }

    pub fn indicators(&self) -> &[IndicatorRecord] {
        &self.indicators
    }

    pub fn merged(&self) -> &[MergedRecord] {
        &self.merged
    }

    /// Indicator countries without a boundary of the same name
    pub fn unmatched_countries(&self) -> &[String] {
        &self.unmatched_countries
    }

    /// Merged rows of one year
    pub fn merged_for_year(&self, year: i32) -> impl Iterator<Item = &MergedRecord> + '_ {
        self.merged.iter().filter(move |m| m.year() == year)
    }

    /// Indicator rows of one country, in file order
    pub fn indicators_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a IndicatorRecord> + 'a {
        self.indicators.iter().filter(move |r| r.country == country)
    }

    /// Distinct indicator-table countries in first-appearance order
    ///
    /// This is the country selector's option list. It comes from the
    /// indicator table, so it may include countries that have no boundary.
    pub fn country_options(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.indicators
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.clone())
            .collect()
    }

    /// Change in TFR between two years, recomputed from the indicator rows
    pub fn tfr_change(&self, country: &str, from: i32, to: i32) -> Option<f64> {
        let tfr_in = |year: i32| {
            self.indicators_for_country(country)
                .find(|r| r.year == year)
                .and_then(|r| r.tfr)
        };
        Some(tfr_in(to)? - tfr_in(from)?)
    }

    /// Countries whose `tfr_diff` (read from their last-year row) disagrees
    /// with the recomputed first-to-last-year change
    pub fn diff_mismatches(&self, tolerance: f64) -> Vec<DiffMismatch> {
        let mut tfr_by_year: HashMap<(&str, i32), f64> = HashMap::new();
        for r in &self.indicators {
            if let Some(tfr) = r.tfr {
                tfr_by_year.entry((r.country.as_str(), r.year)).or_insert(tfr);
            }
        }

        let mut seen = HashSet::new();
        self.indicators
            .iter()
            .filter(|r| r.year == LAST_YEAR && seen.insert(r.country.as_str()))
            .filter_map(|r| {
                let given = r.tfr_diff?;
                let first = tfr_by_year.get(&(r.country.as_str(), FIRST_YEAR))?;
                let last = tfr_by_year.get(&(r.country.as_str(), LAST_YEAR))?;
                let recomputed = last - first;
                ((given - recomputed).abs() > tolerance).then(|| DiffMismatch {
                    country: r.country.clone(),
                    given,
                    recomputed,
                })
            })
            .collect()
    }

    /// Row and country counts
    pub fn summary(&self) -> DatasetSummary {
        let indicator_countries: BTreeSet<&str> =
            self.indicators.iter().map(|r| r.country.as_str()).collect();
        let merged_countries: BTreeSet<&str> = self.merged.iter().map(|m| m.country()).collect();

        DatasetSummary {
            boundaries: self.geometry.len(),
            indicator_rows: self.indicators.len(),
            indicator_countries: indicator_countries.len(),
            merged_rows: self.merged.len(),
            merged_countries: merged_countries.len(),
            unmatched_countries: self.unmatched_countries.len(),
            first_year: self.indicators.iter().map(|r| r.year).min(),
            last_year: self.indicators.iter().map(|r| r.year).max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, MultiPolygon};

    fn geo(name: &str) -> GeoRecord {
        let p = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0)];
        GeoRecord::new(name, "Asia", MultiPolygon::new(vec![p]))
    }

    fn row(country: &str, year: i32, tfr: f64, diff: Option<f64>) -> IndicatorRecord {
        IndicatorRecord {
            tfr: Some(tfr),
            tfr_diff: diff,
            ..IndicatorRecord::new(country, year)
        }
    }

    fn sample() -> Dataset {
        Dataset::from_tables(
            vec![geo("China"), geo("India")],
            vec![
                row("China", 1970, 6.1, Some(-4.8)),
                row("India", 1970, 5.6, Some(-3.6)),
                row("Korea, Rep.", 1970, 4.5, None),
                row("China", 2020, 1.3, Some(-4.8)),
                row("India", 2020, 2.0, Some(-2.0)),
                row("Korea, Rep.", 2020, 0.8, None),
            ],
        )
    }

    #[test]
    fn test_join_correctness() {
        let ds = sample();
        let geo_names: HashSet<&str> = ds.geometry().iter().map(|g| g.name.as_str()).collect();
        for m in ds.merged() {
            assert!(geo_names.contains(m.country()));
            assert!(ds.indicators().iter().any(|r| r.country == m.country()));
        }
        assert_eq!(ds.merged().len(), 4);
        assert_eq!(ds.unmatched_countries(), ["Korea, Rep.".to_string()]);
    }

    #[test]
    fn test_country_options_first_appearance_order() {
        assert_eq!(sample().country_options(), vec!["China", "India", "Korea, Rep."]);
    }

    #[test]
    fn test_merged_for_year() {
        let ds = sample();
        let names: Vec<&str> = ds.merged_for_year(2020).map(|m| m.country()).collect();
        assert_eq!(names, vec!["China", "India"]);
        assert_eq!(ds.merged_for_year(1995).count(), 0);
    }

    #[test]
    fn test_tfr_change_recomputed() {
        let ds = sample();
        let change = ds.tfr_change("China", FIRST_YEAR, LAST_YEAR).unwrap();
        assert!((change - (1.3 - 6.1)).abs() < 1e-9);
        assert_eq!(ds.tfr_change("Atlantis", FIRST_YEAR, LAST_YEAR), None);
        assert_eq!(ds.tfr_change("China", 1970, 1999), None);
    }

    #[test]
    fn test_diff_mismatches() {
        let mismatches = sample().diff_mismatches(1e-6);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].country, "India");
        assert!((mismatches[0].recomputed - (-3.6)).abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.boundaries, 2);
        assert_eq!(summary.indicator_rows, 6);
        assert_eq!(summary.indicator_countries, 3);
        assert_eq!(summary.merged_countries, 2);
        assert_eq!(summary.unmatched_countries, 1);
        assert_eq!(summary.first_year, Some(1970));
        assert_eq!(summary.last_year, Some(2020));
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let sources = DataConfig {
            indicators: "/nonexistent/tfr_dataset.csv".into(),
            geometry: "/nonexistent/world.geojson".into(),
        };
        let err = Dataset::load(&sources).unwrap_err();
        match err {
            DashboardError::WithContext { source, .. } => {
                assert!(matches!(*source, DashboardError::MissingFile(_)))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
