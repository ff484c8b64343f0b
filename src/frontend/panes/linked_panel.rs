//! Economic indicators pane - brushable scatter with linked summaries
//!
//! Dragging over the scatter draws a brush; the continent bars and the four
//! box plots below only count the countries inside it. Double-click or the
//! "Clear selection" button removes the brush. The brush is local to this
//! pane and is never saved.

use std::collections::BTreeMap;

use egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot, PlotBounds, PlotPoints, Points, Polygon,
};

use crate::analysis::{palette, Brush};
use crate::charts::linked::{CONTINENT_TITLE, SCATTER_TITLE, X_DOMAIN, X_LABEL, Y_DOMAIN, Y_LABEL};
use crate::charts::{LinkedPanel, MetricSummary, SecondaryViews, LINKED_PANEL_YEAR};
use crate::frontend::pane_trait::Pane;
use crate::frontend::plot::{chart_title, legend_strip};
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;

const BRUSH_FILL: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 40);
const BOX_PLOT_HEIGHT: f32 = 56.0;
/// Pointer distance in pixels that still counts as hovering a point
const HOVER_SLACK: f64 = 3.0;

/// State for the linked panel pane
#[derive(Default)]
pub struct LinkedPanelState {
    /// Scatter rows, built on first render
    panel: Option<LinkedPanel>,
    /// Active brush
    brush: Option<Brush>,
    /// Data position where the current drag started
    drag_start: Option<[f64; 2]>,
    /// Secondary views for the brush they were computed with
    secondary: Option<(Option<Brush>, SecondaryViews)>,
}

impl LinkedPanelState {
    pub fn brush(&self) -> Option<&Brush> {
        self.brush.as_ref()
    }

    pub fn clear_brush(&mut self) {
        if self.brush.take().is_some() {
            tracing::debug!("Brush cleared");
        }
        self.drag_start = None;
    }
}

/// Render the linked panel pane
pub fn render(
    state: &mut LinkedPanelState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    let point_radius = shared.config.ui.point_radius;
    let panel = state
        .panel
        .get_or_insert_with(|| LinkedPanel::build(shared.dataset, LINKED_PANEL_YEAR));

    if panel.points.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(format!("No merged rows for {}", LINKED_PANEL_YEAR));
        });
        return Vec::new();
    }

    let mut clear = false;
    ui.horizontal(|ui| {
        ui.heading(format!("Indicators in {}", panel.year));
        ui.separator();
        let selected = panel.selected(state.brush.as_ref()).len();
        ui.label(format!("Selected: {} of {} countries", selected, panel.points.len()));
        if ui
            .add_enabled(state.brush.is_some(), egui::Button::new("Clear selection"))
            .clicked()
        {
            clear = true;
        }
    });
    ui.separator();

    let scatter_height = (ui.available_height() * 0.55).max(200.0);

    ui.columns(2, |columns| {
        let (left, right) = columns.split_at_mut(1);
        let left = &mut left[0];
        let right = &mut right[0];

        // Scatter
        chart_title(left, SCATTER_TITLE);
        let brush = state.brush;
        let plot = Plot::new("linked_scatter")
            .height(scatter_height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .x_axis_label(X_LABEL)
            .y_axis_label(Y_LABEL);

        let response = plot.show(left, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [X_DOMAIN.0, Y_DOMAIN.0],
                [X_DOMAIN.1, Y_DOMAIN.1],
            ));

            // Group markers by color, gray first so selected points stay on top
            let mut by_color: BTreeMap<[u8; 4], Vec<[f64; 2]>> = BTreeMap::new();
            for (point, pos) in panel.plotted() {
                let color = panel.point_color(point, brush.as_ref());
                by_color.entry(color.to_array()).or_default().push(pos);
            }
            let gray = palette::LIGHT_GRAY.to_array();
            if let Some(points) = by_color.remove(&gray) {
                plot_ui.points(
                    Points::new("", PlotPoints::from(points))
                        .color(palette::LIGHT_GRAY)
                        .radius(point_radius)
                        .filled(true),
                );
            }
            for (rgba, points) in by_color {
                let color = Color32::from_rgba_premultiplied(rgba[0], rgba[1], rgba[2], rgba[3]);
                plot_ui.points(
                    Points::new("", PlotPoints::from(points))
                        .color(color)
                        .radius(point_radius)
                        .filled(true),
                );
            }

            if let Some(brush) = brush {
                plot_ui.polygon(
                    Polygon::new("selection", PlotPoints::from(brush.corners().to_vec()))
                        .fill_color(BRUSH_FILL)
                        .stroke(Stroke::new(1.0, Color32::GRAY)),
                );
            }
        });

        // Brush interaction
        let pointer_value = response
            .response
            .interact_pointer_pos()
            .map(|pos| response.transform.value_from_position(pos))
            .map(|v| [v.x, v.y]);

        if response.response.double_clicked() {
            clear = true;
        } else if response.response.drag_started() {
            state.drag_start = pointer_value;
        } else if response.response.dragged() {
            if let (Some(start), Some(current)) = (state.drag_start, pointer_value) {
                state.brush = Some(Brush::from_corners(start, current));
            }
        } else if response.response.drag_stopped() {
            state.drag_start = None;
            match state.brush {
                Some(b) if b.width() == 0.0 || b.height() == 0.0 => state.brush = None,
                Some(b) => tracing::debug!(
                    "Brush set to x [{:.2}, {:.2}], y [{:.2}, {:.2}]",
                    b.min_x,
                    b.max_x,
                    b.min_y,
                    b.max_y
                ),
                None => {}
            }
        }

        // Tooltip for the point under the pointer
        if let Some(hover) = response.response.hover_pos() {
            let at = response.transform.value_from_position(hover);
            let per_pixel = response.transform.dvalue_dpos();
            let scale = [per_pixel[0].abs(), per_pixel[1].abs()];
            let radius = f64::from(point_radius) + HOVER_SLACK;
            if let Some(point) = panel.nearest([at.x, at.y], scale, radius) {
                response.response.on_hover_text(point.tooltip());
            }
        }

        legend_strip(left, Some("TFR"), &panel.legend());

        // Secondary views
        let brush = state.brush;
        if state.secondary.as_ref().map_or(true, |(key, _)| *key != brush) {
            state.secondary = Some((brush, panel.secondary(brush.as_ref())));
        }
        let Some((_, views)) = &state.secondary else {
            return;
        };

        continent_chart(right, views);
        for summary in &views.boxes {
            box_chart(right, summary);
        }
    });

    if clear {
        state.clear_brush();
    }

    Vec::new()
}

fn continent_chart(ui: &mut Ui, views: &SecondaryViews) {
    chart_title(ui, CONTINENT_TITLE);

    let n = views.continents.len();
    let names: Vec<String> = views.continents.iter().map(|(c, _)| c.clone()).collect();
    // first continent on top
    let bars: Vec<Bar> = views
        .continents
        .iter()
        .enumerate()
        .map(|(i, (continent, count))| {
            Bar::new((n - 1 - i) as f64, *count as f64)
                .name(continent)
                .fill(palette::STEEL_BLUE)
        })
        .collect();

    let max_count = views.continents.iter().map(|(_, c)| *c).max().unwrap_or(1);

    Plot::new("linked_continents")
        .height((n.max(1) as f32 * 22.0).clamp(60.0, 180.0))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .y_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            names
                .len()
                .checked_sub(1 + index as usize)
                .and_then(|i| names.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [0.0, -0.6],
                [max_count as f64 * 1.05, n.max(1) as f64 - 0.4],
            ));
            plot_ui.bar_chart(BarChart::new(CONTINENT_TITLE, bars).horizontal());
        });
}

fn box_chart(ui: &mut Ui, summary: &MetricSummary) {
    let metric = summary.metric;
    let (lo, hi) = metric.domain();

    Plot::new(("linked_box", metric.title()))
        .height(BOX_PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .show_axes([true, false])
        .x_axis_label(metric.title())
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([lo, -1.0], [hi, 1.0]));
            if let Some(s) = summary.summary {
                let elem = BoxElem::new(0.0, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
                    .box_width(0.8)
                    .whisker_width(0.6)
                    .fill(metric.color().gamma_multiply(0.6))
                    .stroke(Stroke::new(1.5, metric.color()))
                    .name(format!("n = {}", s.count));
                plot_ui.box_plot(BoxPlot::new(metric.title(), vec![elem]).horizontal());
            }
        });
}

impl Pane for LinkedPanelState {
    fn kind(&self) -> PaneKind {
        PaneKind::LinkedPanel
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_brush() {
        let mut state = LinkedPanelState {
            brush: Some(Brush::from_corners([7.0, 1.0], [9.0, 3.0])),
            drag_start: Some([7.0, 1.0]),
            ..Default::default()
        };
        state.clear_brush();
        assert!(state.brush().is_none());
        assert!(state.drag_start.is_none());
    }
}
