//! Per-country evolution of seven indicators
//!
//! Every series gets its own min-max scale so that all seven fit on one
//! `[0, 1]` axis; the y axis therefore carries no tick labels. Gaps in a
//! series split it into segments, and a segment of one year is drawn as a
//! marker.

use egui::Color32;

use crate::analysis::{palette, UnitScale};
use crate::types::{Indicator, IndicatorRecord};

pub const TREND_TITLE: &str = "Evolution of Indices";

/// Stroke pattern of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: Color32,
    pub dash: Dash,
    pub width: f32,
}

const DEFAULT_WIDTH: f32 = 1.5;

/// Series drawn by the trend chart, in legend order
pub const TREND_SERIES: [(Indicator, &str); 7] = [
    (Indicator::Tfr, "TFR"),
    (Indicator::AvgGdp, "Avg GDP"),
    (Indicator::Gini, "Gini Index"),
    (Indicator::PrimaryEducation, "Primary Education Rate"),
    (Indicator::LifeExpectancy, "Life Expectancy"),
    (Indicator::AdolescentFertilityRate, "Adolescent Fertility Rate"),
    (Indicator::FemaleMaleLabor, "Female Labor Participation"),
];

fn style_of(indicator: Indicator) -> SeriesStyle {
    let (color, dash, width) = match indicator {
        Indicator::Tfr => (palette::BLUE, Dash::Solid, 2.0),
        Indicator::AvgGdp => (palette::RED, Dash::Dashed, 2.0),
        Indicator::Gini => (palette::GREEN, Dash::DashDot, DEFAULT_WIDTH),
        Indicator::PrimaryEducation => (palette::CYAN, Dash::Dotted, DEFAULT_WIDTH),
        Indicator::LifeExpectancy => (palette::MAGENTA, Dash::DashDot, DEFAULT_WIDTH),
        Indicator::AdolescentFertilityRate => (palette::YELLOW, Dash::Dotted, DEFAULT_WIDTH),
        Indicator::FemaleMaleLabor => (palette::BLACK, Dash::Dashed, DEFAULT_WIDTH),
        _ => (palette::STEEL_BLUE, Dash::Solid, DEFAULT_WIDTH),
    };
    SeriesStyle { color, dash, width }
}

/// One normalized series
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub indicator: Indicator,
    pub label: &'static str,
    pub style: SeriesStyle,
    /// Observed range before normalization
    pub scale: Option<UnitScale>,
    /// Runs of consecutive observed years as `[year, normalized value]`
    pub segments: Vec<Vec<[f64; 2]>>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }

    /// Value before normalization
    pub fn raw_value(&self, normalized: f64) -> Option<f64> {
        let s = self.scale?;
        Some(s.min + normalized * (s.max - s.min))
    }
}

/// The trend chart of one country
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub country: String,
    pub title: &'static str,
    pub series: Vec<TrendSeries>,
    /// First and last year with any row
    pub years: Option<(i32, i32)>,
}

impl TrendChart {
    /// True when no series has a single point
    pub fn is_blank(&self) -> bool {
        self.series.iter().all(TrendSeries::is_empty)
    }
}

/// Build the trend chart for one country from the unfiltered indicator table
///
/// An unknown country yields seven empty series.
pub fn build_country_trend(indicators: &[IndicatorRecord], country: &str) -> TrendChart {
    let mut rows: Vec<&IndicatorRecord> = indicators.iter().filter(|r| r.country == country).collect();
    rows.sort_by_key(|r| r.year);

    if rows.is_empty() {
        tracing::debug!("No indicator rows for '{}'", country);
    }

    let series = TREND_SERIES
        .iter()
        .map(|&(indicator, label)| build_series(&rows, indicator, label))
        .collect();

    TrendChart {
        country: country.to_string(),
        title: TREND_TITLE,
        series,
        years: rows.first().zip(rows.last()).map(|(a, b)| (a.year, b.year)),
    }
}

fn build_series(rows: &[&IndicatorRecord], indicator: Indicator, label: &'static str) -> TrendSeries {
    let scale = UnitScale::fit(rows.iter().filter_map(|r| indicator.value(r)));

    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for r in rows {
        match (indicator.value(r), scale) {
            (Some(v), Some(s)) => current.push([f64::from(r.year), s.apply(v)]),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    TrendSeries {
        indicator,
        label,
        style: style_of(indicator),
        scale,
        segments,
    }
}
