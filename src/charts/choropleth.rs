//! Choropleth map of TFR or its 50-year change

use std::sync::Arc;

use egui::Color32;
use geo::{BoundingRect, Contains, MultiPolygon, Point, Rect, TriangulateEarcut};

use crate::analysis::{Class, ClassificationScheme, LegendEntry};
use crate::data::Dataset;
use crate::selection::MapView;

/// One country on the map
#[derive(Debug, Clone)]
pub struct ShadedRegion {
    pub country: String,
    pub continent: String,
    pub value: Option<f64>,
    pub class: Class,
    /// `None` draws the outline only
    pub fill: Option<Color32>,
    pub boundary: Arc<MultiPolygon<f64>>,
    /// Fill triangulation of the boundary
    pub triangles: Vec<[[f64; 2]; 3]>,
    bbox: Option<Rect<f64>>,
}

impl ShadedRegion {
    /// Exterior and interior rings, for drawing outlines
    pub fn rings(&self) -> impl Iterator<Item = Vec<[f64; 2]>> + '_ {
        self.boundary.iter().flat_map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>())
        })
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        let point = Point::new(lon, lat);
        self.bbox.is_some_and(|b| b.contains(&point)) && self.boundary.contains(&point)
    }

    /// Hover text: name and value
    pub fn describe(&self) -> String {
        match self.value {
            Some(v) => format!("{}\n{:.2}", self.country, v),
            None => format!("{}\nNo data", self.country),
        }
    }
}

/// A map ready to draw
#[derive(Debug, Clone)]
pub struct ChoroplethChart {
    pub view: MapView,
    pub title: &'static str,
    pub regions: Vec<ShadedRegion>,
    pub legend: Vec<LegendEntry>,
}

impl ChoroplethChart {
    /// Region under a point in map coordinates
    pub fn region_at(&self, lon: f64, lat: f64) -> Option<&ShadedRegion> {
        self.regions.iter().find(|r| r.contains(lon, lat))
    }

    /// Bounding box of all regions
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.regions
            .iter()
            .filter_map(|r| r.bbox)
            .reduce(|a, b| {
                Rect::new(
                    (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                    (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
                )
            })
    }

    pub fn count(&self, class: Class) -> usize {
        self.regions.iter().filter(|r| r.class == class).count()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Build the map for one view
///
/// Snapshot views color each country by its TFR in that year; the
/// difference view colors the 2020 rows by `tfr_diff`.
pub fn build_choropleth(dataset: &Dataset, view: MapView) -> ChoroplethChart {
    let scheme = view.scheme();
    let indicator = view.indicator();

    let regions: Vec<ShadedRegion> = dataset
        .merged_for_year(view.year())
        .map(|row| {
            let value = row.get(indicator);
            let class = scheme.classify(value);
            ShadedRegion {
                country: row.country().to_string(),
                continent: row.continent.clone(),
                value,
                class,
                fill: scheme.color(class),
                triangles: triangulate(&row.boundary),
                bbox: row.boundary.bounding_rect(),
                boundary: Arc::clone(&row.boundary),
            }
        })
        .collect();

    let legend = legend_for(&scheme, &regions);

    let out_of_range = regions.iter().filter(|r| r.class == Class::OutOfRange).count();
    if out_of_range > 0 {
        tracing::debug!(
            "{}: {} countries outside the legend range",
            view.label(),
            out_of_range
        );
    }
    if regions.is_empty() {
        tracing::debug!("{}: no merged rows for {}", view.label(), view.year());
    }

    ChoroplethChart {
        view,
        title: view.title(),
        regions,
        legend,
    }
}

fn triangulate(boundary: &MultiPolygon<f64>) -> Vec<[[f64; 2]; 3]> {
    boundary
        .iter()
        .flat_map(|polygon| polygon.earcut_triangles_iter())
        .map(|t| t.to_array().map(|c| [c.x, c.y]))
        .collect()
}

fn legend_for(scheme: &ClassificationScheme, regions: &[ShadedRegion]) -> Vec<LegendEntry> {
    let has = |class: Class| regions.iter().any(|r| r.class == class);
    let mut legend = scheme.legend(has(Class::OutOfRange));
    if has(Class::Missing) {
        legend.push(LegendEntry {
            class: Class::Missing,
            label: scheme.label(Class::Missing),
            color: Color32::TRANSPARENT,
        });
    }
    legend
}
