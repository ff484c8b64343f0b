//! Core data types for the TFR dashboard
//!
//! This module contains the row types of the three tables the dashboard works
//! with, plus the [`Indicator`] enum that names every numeric column.
//!
//! # Main Types
//!
//! - [`GeoRecord`] - A country boundary with its continent
//! - [`IndicatorRecord`] - One (country, year) row of World Bank indicators
//! - [`MergedRecord`] - An indicator row joined with its boundary
//! - [`Indicator`] - Column selector with labels and World Bank series codes
//!
//! # Missing Values
//!
//! World Bank series have gaps, so every metric is an `Option<f64>`. Blank CSV
//! cells, placeholders such as `..` and non-finite numbers all read as `None`.

use std::sync::Arc;

use geo::MultiPolygon;
use serde::{Deserialize, Deserializer, Serialize};

/// First year covered by the dataset
pub const FIRST_YEAR: i32 = 1970;

/// Last year covered by the dataset
pub const LAST_YEAR: i32 = 2020;

/// A country boundary from the geometry dataset
#[derive(Debug, Clone)]
pub struct GeoRecord {
    /// Country name, the join key
    pub name: String,
    /// Continent name as given by the geometry source
    pub continent: String,
    /// Boundary polygons; shared by every merged row of the country
    pub boundary: Arc<MultiPolygon<f64>>,
}

impl GeoRecord {
    pub fn new(name: impl Into<String>, continent: impl Into<String>, boundary: MultiPolygon<f64>) -> Self {
        Self {
            name: name.into(),
            continent: continent.into(),
            boundary: Arc::new(boundary),
        }
    }
}

/// One row of the indicator CSV
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub country: String,
    #[serde(rename = "date")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tfr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_gdp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub log_avg_gdp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gini: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub population_density: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub primary_education: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub secondary_education: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub contraceptive_prevalence: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub life_expectancy: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub adolescent_fertility_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub female_male_labor: Option<f64>,
    /// TFR change between 1970 and 2020, precomputed upstream
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tfr_diff: Option<f64>,
}

/// Read a metric cell, treating anything that is not a number as missing
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            tracing::warn!("Unreadable indicator value '{}', treated as missing", raw);
            Ok(None)
        }
    }
}

impl IndicatorRecord {
    /// Create an empty row for a country and year
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            ..Default::default()
        }
    }

    /// Replace non-finite values with `None` and derive `log_avg_gdp` when absent
    pub fn normalize(mut self) -> Self {
        for indicator in Indicator::all() {
            let slot = indicator.slot_mut(&mut self);
            if slot.is_some_and(|v| !v.is_finite()) {
                *slot = None;
            }
        }
        if self.log_avg_gdp.is_none() {
            self.log_avg_gdp = self.avg_gdp.filter(|v| *v > 0.0).map(f64::ln);
        }
        self
    }

    /// Read one indicator value
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        indicator.value(self)
    }
}

/// An indicator row joined with the boundary of the same-named country
#[derive(Debug, Clone)]
pub struct MergedRecord {
    pub indicators: IndicatorRecord,
    pub continent: String,
    pub boundary: Arc<MultiPolygon<f64>>,
}

impl MergedRecord {
    pub fn new(indicators: IndicatorRecord, geo: &GeoRecord) -> Self {
        Self {
            indicators,
            continent: geo.continent.clone(),
            boundary: Arc::clone(&geo.boundary),
        }
    }

    pub fn country(&self) -> &str {
        &self.indicators.country
    }

    pub fn year(&self) -> i32 {
        self.indicators.year
    }

    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        indicator.value(&self.indicators)
    }
}

/// Numeric columns of the indicator table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Tfr,
    AvgGdp,
    LogAvgGdp,
    Gini,
    PopulationDensity,
    PrimaryEducation,
    SecondaryEducation,
    ContraceptivePrevalence,
    LifeExpectancy,
    AdolescentFertilityRate,
    FemaleMaleLabor,
    TfrDiff,
}

impl Indicator {
    /// All indicators in CSV column order
    pub fn all() -> &'static [Indicator] {
        &[
            Indicator::Tfr,
            Indicator::AvgGdp,
            Indicator::LogAvgGdp,
            Indicator::Gini,
            Indicator::PopulationDensity,
            Indicator::PrimaryEducation,
            Indicator::SecondaryEducation,
            Indicator::ContraceptivePrevalence,
            Indicator::LifeExpectancy,
            Indicator::AdolescentFertilityRate,
            Indicator::FemaleMaleLabor,
            Indicator::TfrDiff,
        ]
    }

    /// CSV column name
    pub fn column(&self) -> &'static str {
        match self {
            Indicator::Tfr => "tfr",
            Indicator::AvgGdp => "avg_gdp",
            Indicator::LogAvgGdp => "log_avg_gdp",
            Indicator::Gini => "gini",
            Indicator::PopulationDensity => "population_density",
            Indicator::PrimaryEducation => "primary_education",
            Indicator::SecondaryEducation => "secondary_education",
            Indicator::ContraceptivePrevalence => "contraceptive_prevalence",
            Indicator::LifeExpectancy => "life_expectancy",
            Indicator::AdolescentFertilityRate => "adolescent_fertility_rate",
            Indicator::FemaleMaleLabor => "female_male_labor",
            Indicator::TfrDiff => "tfr_diff",
        }
    }

    /// Human readable label used in legends and axis titles
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Tfr => "TFR",
            Indicator::AvgGdp => "Avg GDP",
            Indicator::LogAvgGdp => "Log Average GDP",
            Indicator::Gini => "Gini Index",
            Indicator::PopulationDensity => "Population Density",
            Indicator::PrimaryEducation => "Primary Education Rate",
            Indicator::SecondaryEducation => "Secondary Education Rate",
            Indicator::ContraceptivePrevalence => "Contraceptive Prevalence",
            Indicator::LifeExpectancy => "Life Expectancy",
            Indicator::AdolescentFertilityRate => "Adolescent Fertility Rate",
            Indicator::FemaleMaleLabor => "Female Labor Participation",
            Indicator::TfrDiff => "TFR Change 1970-2020",
        }
    }

    /// World Bank series the column is downloaded from, if it is a raw series
    pub fn world_bank_code(&self) -> Option<&'static str> {
        match self {
            Indicator::Tfr => Some("SP.DYN.TFRT.IN"),
            Indicator::Gini => Some("SI.POV.GINI"),
            Indicator::PopulationDensity => Some("EN.POP.DNST"),
            Indicator::PrimaryEducation => Some("SE.PRM.ENRR"),
            Indicator::SecondaryEducation => Some("SE.SEC.ENRR"),
            Indicator::ContraceptivePrevalence => Some("SP.DYN.CONU.ZS"),
            Indicator::LifeExpectancy => Some("SP.DYN.LE00.IN"),
            Indicator::AdolescentFertilityRate => Some("SP.ADO.TFRT"),
            Indicator::FemaleMaleLabor => Some("SL.TLF.CACT.FM.ZS"),
            // Derived from NY.GDP.MKTP.CD and SP.POP.TOTL, or from tfr
            Indicator::AvgGdp | Indicator::LogAvgGdp | Indicator::TfrDiff => None,
        }
    }

    /// Read this indicator from a row
    pub fn value(&self, record: &IndicatorRecord) -> Option<f64> {
        match self {
            Indicator::Tfr => record.tfr,
            Indicator::AvgGdp => record.avg_gdp,
            Indicator::LogAvgGdp => record.log_avg_gdp,
            Indicator::Gini => record.gini,
            Indicator::PopulationDensity => record.population_density,
            Indicator::PrimaryEducation => record.primary_education,
            Indicator::SecondaryEducation => record.secondary_education,
            Indicator::ContraceptivePrevalence => record.contraceptive_prevalence,
            Indicator::LifeExpectancy => record.life_expectancy,
            Indicator::AdolescentFertilityRate => record.adolescent_fertility_rate,
            Indicator::FemaleMaleLabor => record.female_male_labor,
            Indicator::TfrDiff => record.tfr_diff,
        }
    }

    fn slot_mut<'a>(&self, record: &'a mut IndicatorRecord) -> &'a mut Option<f64> {
        match self {
            Indicator::Tfr => &mut record.tfr,
            Indicator::AvgGdp => &mut record.avg_gdp,
            Indicator::LogAvgGdp => &mut record.log_avg_gdp,
            Indicator::Gini => &mut record.gini,
            Indicator::PopulationDensity => &mut record.population_density,
            Indicator::PrimaryEducation => &mut record.primary_education,
            Indicator::SecondaryEducation => &mut record.secondary_education,
            Indicator::ContraceptivePrevalence => &mut record.contraceptive_prevalence,
            Indicator::LifeExpectancy => &mut record.life_expectancy,
            Indicator::AdolescentFertilityRate => &mut record.adolescent_fertility_rate,
            Indicator::FemaleMaleLabor => &mut record.female_male_labor,
            Indicator::TfrDiff => &mut record.tfr_diff,
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
