//! Map pane - choropleth of TFR in 1970, 2020, or its 50-year change
//!
//! The chart is rebuilt only when the map view selector changes. Hovering a
//! country shows its value; clicking one that has indicator rows makes it the
//! country of the trend chart.

use egui::{Stroke, Ui};
use egui_plot::Plot;

use crate::analysis::palette;
use crate::charts::{build_choropleth, ChoroplethChart};
use crate::data::Dataset;
use crate::frontend::pane_trait::Pane;
use crate::frontend::plot::{chart_title, legend_strip, paint_regions};
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;
use crate::selection::MapView;

/// Edge width of country outlines
const EDGE_WIDTH: f32 = 0.8;

/// State for the map pane
#[derive(Default)]
pub struct MapViewState {
    /// Cached chart for the view it was built for
    chart: Option<ChoroplethChart>,
    /// Country under the pointer in the last frame
    hovered: Option<String>,
}

impl MapViewState {
    fn chart_for(&mut self, dataset: &Dataset, view: MapView) -> &ChoroplethChart {
        if self.chart.as_ref().map_or(true, |c| c.view != view) {
            tracing::debug!("Building choropleth for {}", view);
            self.hovered = None;
            self.chart = Some(build_choropleth(dataset, view));
        }
        self.chart.get_or_insert_with(|| build_choropleth(dataset, view))
    }
}

fn legend_title(view: MapView) -> &'static str {
    match view {
        MapView::Year1970 | MapView::Year2020 => "TFR",
        MapView::TfrDifference => "TFR change",
    }
}

/// Render the map pane
pub fn render(state: &mut MapViewState, shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();
    let map_height = shared.config.ui.map_height;
    let hovered = state.hovered.clone();
    let chart = state.chart_for(shared.dataset, shared.selection.map_view);

    chart_title(ui, chart.title);

    let Some(bounds) = chart.bounds() else {
        ui.centered_and_justified(|ui| {
            ui.label("No country matched both datasets; nothing to draw");
        });
        return actions;
    };

    let height = map_height.min((ui.available_height() - 40.0).max(120.0));
    let plot = Plot::new("tfr_choropleth")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .include_x(bounds.min().x)
        .include_x(bounds.max().x)
        .include_y(bounds.min().y)
        .include_y(bounds.max().y);

    let response = plot.show(ui, |_plot_ui| {});

    let painter = ui.painter_at(response.response.rect);
    paint_regions(
        &painter,
        &response.transform,
        &chart.regions,
        hovered.as_deref(),
        Stroke::new(EDGE_WIDTH, palette::BOUNDARY_EDGE),
    );

    let under_pointer = response.response.hover_pos().and_then(|pos| {
        let value = response.transform.value_from_position(pos);
        chart.region_at(value.x, value.y)
    });
    let new_hovered = under_pointer.map(|r| r.country.clone());

    if let Some(region) = under_pointer {
        if response.response.clicked() && shared.country_options.contains(&region.country) {
            actions.push(AppAction::SelectCountry(region.country.clone()));
        }
        response.response.on_hover_text(region.describe());
    }

    legend_strip(ui, Some(legend_title(chart.view)), &chart.legend);

    state.hovered = new_hovered;
    actions
}

impl Pane for MapViewState {
    fn kind(&self) -> PaneKind {
        PaneKind::Map
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }
}
