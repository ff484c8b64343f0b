//! Linked scatter and summary panel
//!
//! The scatter plots TFR against log average GDP for one year. A rectangular
//! [`Brush`] drawn on the scatter filters the secondary views: a continent
//! histogram and four box summaries. Without a brush every row counts.

use egui::Color32;

use crate::analysis::{brush, count_by, palette, BoxSummary, Brush, ClassificationScheme, LegendEntry};
use crate::data::Dataset;
use crate::types::{Indicator, LAST_YEAR};

/// Year shown by the linked panel
pub const LINKED_PANEL_YEAR: i32 = LAST_YEAR;

pub const SCATTER_TITLE: &str = "Avg GDP vs. TFR";
pub const X_LABEL: &str = "Log Average GDP";
pub const Y_LABEL: &str = "Total Fertility Rate";
pub const CONTINENT_TITLE: &str = "Continents";

/// Fixed scatter x domain
pub const X_DOMAIN: (f64, f64) = (5.0, 12.0);
/// Fixed scatter y domain
pub const Y_DOMAIN: (f64, f64) = (0.5, 7.0);

/// Metrics summarized as box plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxMetric {
    PrimaryEducation,
    FemaleMaleLabor,
    LifeExpectancy,
    ContraceptivePrevalence,
}

impl BoxMetric {
    pub const ALL: [BoxMetric; 4] = [
        BoxMetric::PrimaryEducation,
        BoxMetric::FemaleMaleLabor,
        BoxMetric::LifeExpectancy,
        BoxMetric::ContraceptivePrevalence,
    ];

    pub fn indicator(&self) -> Indicator {
        match self {
            BoxMetric::PrimaryEducation => Indicator::PrimaryEducation,
            BoxMetric::FemaleMaleLabor => Indicator::FemaleMaleLabor,
            BoxMetric::LifeExpectancy => Indicator::LifeExpectancy,
            BoxMetric::ContraceptivePrevalence => Indicator::ContraceptivePrevalence,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoxMetric::PrimaryEducation => "Primary Education Rate",
            BoxMetric::FemaleMaleLabor => "Female Labor Participation",
            BoxMetric::LifeExpectancy => "Life Expectancy",
            BoxMetric::ContraceptivePrevalence => "Contraceptive Prevalence",
        }
    }

    /// Fixed axis domain
    pub fn domain(&self) -> (f64, f64) {
        match self {
            BoxMetric::PrimaryEducation => (60.0, 140.0),
            BoxMetric::FemaleMaleLabor => (20.0, 110.0),
            BoxMetric::LifeExpectancy => (50.0, 85.0),
            BoxMetric::ContraceptivePrevalence => (10.0, 80.0),
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            BoxMetric::PrimaryEducation => palette::ORANGE,
            BoxMetric::FemaleMaleLabor => palette::BROWN,
            BoxMetric::LifeExpectancy => palette::OLIVE,
            BoxMetric::ContraceptivePrevalence => palette::TEAL,
        }
    }

    fn index(&self) -> usize {
        match self {
            BoxMetric::PrimaryEducation => 0,
            BoxMetric::FemaleMaleLabor => 1,
            BoxMetric::LifeExpectancy => 2,
            BoxMetric::ContraceptivePrevalence => 3,
        }
    }
}

/// One country of the linked panel
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub continent: String,
    pub log_avg_gdp: Option<f64>,
    pub tfr: Option<f64>,
    pub population_density: Option<f64>,
    metrics: [Option<f64>; 4],
}

impl ScatterPoint {
    /// Scatter position; `None` when either coordinate is missing
    pub fn position(&self) -> Option<[f64; 2]> {
        Some([self.log_avg_gdp?, self.tfr?])
    }

    pub fn metric(&self, metric: BoxMetric) -> Option<f64> {
        self.metrics[metric.index()]
    }

    pub fn tooltip(&self) -> String {
        let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        format!(
            "{}\nTFR: {}\nPopulation density: {}",
            self.country,
            fmt(self.tfr),
            fmt(self.population_density)
        )
    }
}

/// Box summary of one metric over the selected rows
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub metric: BoxMetric,
    /// `None` when no selected row has a value
    pub summary: Option<BoxSummary>,
}

/// Views filtered by the brush
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryViews {
    /// Number of selected rows
    pub selected: usize,
    /// Selected rows per continent, ordered by continent name
    pub continents: Vec<(String, usize)>,
    /// One entry per [`BoxMetric::ALL`], in that order
    pub boxes: Vec<MetricSummary>,
}

/// Scatter rows of one year plus the color scale
#[derive(Debug, Clone)]
pub struct LinkedPanel {
    pub year: i32,
    pub points: Vec<ScatterPoint>,
    scheme: ClassificationScheme,
}

impl LinkedPanel {
    pub fn build(dataset: &Dataset, year: i32) -> Self {
        let points: Vec<ScatterPoint> = dataset
            .merged_for_year(year)
            .map(|row| ScatterPoint {
                country: row.country().to_string(),
                continent: row.continent.clone(),
                log_avg_gdp: row.get(Indicator::LogAvgGdp),
                tfr: row.get(Indicator::Tfr),
                population_density: row.get(Indicator::PopulationDensity),
                metrics: BoxMetric::ALL.map(|m| row.get(m.indicator())),
            })
            .collect();

        let unplotted = points.iter().filter(|p| p.position().is_none()).count();
        tracing::debug!(
            "Linked panel for {}: {} rows, {} without scatter coordinates",
            year,
            points.len(),
            unplotted
        );

        Self {
            year,
            points,
            scheme: ClassificationScheme::tfr_quantized(),
        }
    }

    /// Points that have both coordinates
    pub fn plotted(&self) -> impl Iterator<Item = (&ScatterPoint, [f64; 2])> + '_ {
        self.points.iter().filter_map(|p| p.position().map(|pos| (p, pos)))
    }

    /// Marker color, light gray when outside an active brush
    pub fn point_color(&self, point: &ScatterPoint, brush: Option<&Brush>) -> Color32 {
        if !brush::is_selected(brush, point.log_avg_gdp, point.tfr) {
            return palette::LIGHT_GRAY;
        }
        self.scheme.color_of(point.tfr).unwrap_or(palette::LIGHT_GRAY)
    }

    /// TFR color legend
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.scheme.legend(false)
    }

    /// Rows selected by an optional brush
    pub fn selected(&self, brush: Option<&Brush>) -> Vec<&ScatterPoint> {
        brush::select(&self.points, brush, |p| (p.log_avg_gdp, p.tfr))
    }

    /// Closest plotted point within `radius`, distances measured after
    /// dividing each axis by its scale
    pub fn nearest(&self, at: [f64; 2], scale: [f64; 2], radius: f64) -> Option<&ScatterPoint> {
        self.plotted()
            .map(|(p, pos)| {
                let dx = (pos[0] - at[0]) / scale[0];
                let dy = (pos[1] - at[1]) / scale[1];
                (p, dx * dx + dy * dy)
            })
            .filter(|(_, d2)| *d2 <= radius * radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }

    /// Secondary views over the brushed rows
    pub fn secondary(&self, brush: Option<&Brush>) -> SecondaryViews {
        let selected = self.selected(brush);

        let continents = count_by(selected.iter().copied(), |p| p.continent.clone());
        let boxes = BoxMetric::ALL
            .iter()
            .map(|&metric| MetricSummary {
                metric,
                summary: BoxSummary::from_values(selected.iter().filter_map(|p| p.metric(metric))),
            })
            .collect();

        SecondaryViews {
            selected: selected.len(),
            continents,
            boxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GeoRecord, IndicatorRecord};
    use geo::{polygon, MultiPolygon};

    fn geo(name: &str, continent: &str) -> GeoRecord {
        let p = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        GeoRecord::new(name, continent, MultiPolygon::new(vec![p]))
    }

    fn row(country: &str, gdp: Option<f64>, tfr: Option<f64>, life: Option<f64>) -> IndicatorRecord {
        IndicatorRecord {
            log_avg_gdp: gdp,
            tfr,
            life_expectancy: life,
            population_density: Some(100.0),
            ..IndicatorRecord::new(country, LINKED_PANEL_YEAR)
        }
    }

    fn panel() -> LinkedPanel {
        let ds = Dataset::from_tables(
            vec![geo("A", "Europe"), geo("B", "Asia"), geo("C", "Africa"), geo("D", "Africa")],
            vec![
                row("A", Some(8.0), Some(1.5), Some(80.0)),
                row("B", Some(10.0), Some(1.6), Some(84.0)),
                row("C", Some(7.5), Some(4.5), Some(60.0)),
                row("D", None, Some(5.0), None),
                IndicatorRecord {
                    tfr: Some(9.0),
                    ..IndicatorRecord::new("A", 1970)
                },
            ],
        );
        LinkedPanel::build(&ds, LINKED_PANEL_YEAR)
    }

    #[test]
    fn test_build_filters_year() {
        let p = panel();
        assert_eq!(p.points.len(), 4);
        assert_eq!(p.plotted().count(), 3);
    }

    #[test]
    fn test_brush_filters_secondary_views() {
        let p = panel();
        let brush = Brush::from_corners([7.0, 1.0], [9.0, 3.0]);
        let views = p.secondary(Some(&brush));
        assert_eq!(views.selected, 1);
        assert_eq!(views.continents, vec![("Europe".to_string(), 1)]);

        let life = &views.boxes[2];
        assert_eq!(life.metric, BoxMetric::LifeExpectancy);
        assert_eq!(life.summary.map(|s| s.median), Some(80.0));
    }

    #[test]
    fn test_no_brush_selects_all_rows() {
        let views = panel().secondary(None);
        assert_eq!(views.selected, 4);
        assert_eq!(
            views.continents,
            vec![
                ("Africa".to_string(), 2),
                ("Asia".to_string(), 1),
                ("Europe".to_string(), 1)
            ]
        );
        // D has no life expectancy
        assert_eq!(views.boxes[2].summary.map(|s| s.count), Some(3));
        // nobody has primary education
        assert_eq!(views.boxes[0].summary, None);
    }

    #[test]
    fn test_empty_brush() {
        let brush = Brush::from_corners([11.0, 6.5], [12.0, 7.0]);
        let views = panel().secondary(Some(&brush));
        assert_eq!(views.selected, 0);
        assert!(views.continents.is_empty());
        assert!(views.boxes.iter().all(|b| b.summary.is_none()));
    }

    #[test]
    fn test_point_colors() {
        let p = panel();
        let a = &p.points[0];
        let c = &p.points[2];
        assert_eq!(p.point_color(a, None), palette::DARK_BLUE);
        assert_eq!(p.point_color(c, None), palette::RED);

        let brush = Brush::from_corners([7.0, 1.0], [9.0, 3.0]);
        assert_eq!(p.point_color(a, Some(&brush)), palette::DARK_BLUE);
        assert_eq!(p.point_color(c, Some(&brush)), palette::LIGHT_GRAY);
    }

    #[test]
    fn test_nearest_and_tooltip() {
        let p = panel();
        let hit = p.nearest([8.05, 1.52], [1.0, 1.0], 0.2).unwrap();
        assert_eq!(hit.country, "A");
        assert!(p.nearest([11.5, 6.5], [1.0, 1.0], 0.2).is_none());
        assert_eq!(hit.tooltip(), "A\nTFR: 1.50\nPopulation density: 100.00");
    }

    #[test]
    fn test_box_metric_specs() {
        assert_eq!(BoxMetric::ContraceptivePrevalence.domain(), (10.0, 80.0));
        assert_eq!(BoxMetric::FemaleMaleLabor.color(), palette::BROWN);
        assert_eq!(BoxMetric::PrimaryEducation.title(), "Primary Education Rate");
    }
}
