//! Country trend pane - seven normalized indicators over time

use egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints, Points};

use crate::charts::{build_country_trend, TrendChart};
use crate::frontend::pane_trait::Pane;
use crate::frontend::plot::{chart_title, line_style, readable};
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;
use crate::types::{FIRST_YEAR, LAST_YEAR};

const MARKER_RADIUS: f32 = 3.0;

/// State for the country trend pane
#[derive(Default)]
pub struct CountryTrendState {
    /// Cached chart for the country it was built for
    chart: Option<TrendChart>,
}

/// Render the country trend pane
pub fn render(
    state: &mut CountryTrendState,
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    let country = shared.selection.country_or_empty();
    if state.chart.as_ref().map_or(true, |c| c.country != country) {
        tracing::debug!("Building trend chart for '{}'", country);
        state.chart = Some(build_country_trend(shared.dataset.indicators(), country));
    }
    let Some(chart) = &state.chart else {
        return Vec::new();
    };

    ui.horizontal(|ui| {
        ui.heading(if country.is_empty() { "No country" } else { country });
        if let Some((first, last)) = chart.years {
            ui.label(format!("{}–{}", first, last));
        }
    });
    chart_title(ui, chart.title);

    if chart.is_blank() {
        ui.label("No indicator values for this country");
    }

    let (first, last) = chart.years.unwrap_or((FIRST_YEAR, LAST_YEAR));
    let visuals = ui.visuals().clone();

    Plot::new("country_trend")
        .legend(Legend::default().position(Corner::RightTop))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_y(false)
        .x_axis_label("Year")
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|_mark, _range| String::new())
        .label_formatter(|name, point| {
            // Hover shows the observed value, not the normalized one
            let raw = chart
                .series
                .iter()
                .find(|s| s.label == name)
                .and_then(|s| s.raw_value(point.y));
            match raw {
                Some(v) => format!("{}\n{:.0}: {:.2}", name, point.x, v),
                None => format!("{:.0}", point.x),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [f64::from(first) - 1.0, -0.05],
                [f64::from(last) + 1.0, 1.05],
            ));

            for series in &chart.series {
                let color = readable(series.style.color, &visuals);
                for segment in &series.segments {
                    if let [point] = segment.as_slice() {
                        plot_ui.points(
                            Points::new(series.label, PlotPoints::from(vec![*point]))
                                .color(color)
                                .radius(MARKER_RADIUS)
                                .filled(true),
                        );
                    } else {
                        plot_ui.line(
                            Line::new(series.label, PlotPoints::from(segment.clone()))
                                .color(color)
                                .width(series.style.width)
                                .style(line_style(series.style.dash)),
                        );
                    }
                }
            }
        });

    Vec::new()
}

impl Pane for CountryTrendState {
    fn kind(&self) -> PaneKind {
        PaneKind::CountryTrend
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }
}
