//! Inner join of boundaries and indicator rows on the country name
//!
//! Names must match exactly. Indicator rows without a boundary are dropped,
//! and so are boundaries without indicator rows; neither is an error.

use std::collections::{BTreeSet, HashMap};

use crate::types::{GeoRecord, IndicatorRecord, MergedRecord};

/// Result of joining the two tables
#[derive(Debug, Clone, Default)]
pub struct JoinOutcome {
    /// Merged rows in indicator-table order
    pub merged: Vec<MergedRecord>,
    /// Indicator countries that have no boundary, sorted
    pub unmatched_countries: Vec<String>,
    /// Number of indicator rows dropped by the join
    pub dropped_rows: usize,
}

/// Join boundaries and indicator rows on `GeoRecord::name == IndicatorRecord::country`
pub fn merge(geometry: &[GeoRecord], indicators: &[IndicatorRecord]) -> JoinOutcome {
    let mut by_name: HashMap<&str, &GeoRecord> = HashMap::with_capacity(geometry.len());
    for geo in geometry {
        if by_name.contains_key(geo.name.as_str()) {
            tracing::debug!("Duplicate boundary for '{}', keeping the first", geo.name);
            continue;
        }
        by_name.insert(geo.name.as_str(), geo);
    }

    let mut merged = Vec::with_capacity(indicators.len());
    let mut unmatched = BTreeSet::new();
    let mut dropped_rows = 0;

    for row in indicators {
        match by_name.get(row.country.as_str()) {
            Some(geo) => merged.push(MergedRecord::new(row.clone(), geo)),
            None => {
                dropped_rows += 1;
                unmatched.insert(row.country.clone());
            }
        }
    }

    if !unmatched.is_empty() {
        tracing::debug!(
            "Join dropped {} rows from {} countries without a boundary",
            dropped_rows,
            unmatched.len()
        );
    }

    JoinOutcome {
        merged,
        unmatched_countries: unmatched.into_iter().collect(),
        dropped_rows,
    }
}
