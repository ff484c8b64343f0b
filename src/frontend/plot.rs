//! Plot helpers shared by the chart panes
//!
//! egui_plot draws the axes, lines, markers and bars. Two things it does not
//! do are filled concave polygons and discrete color legends, so the map
//! fill is painted as a triangle mesh through the plot transform, and
//! legends are drawn as a strip of swatches below the plot.

use egui::{Color32, Mesh, Pos2, Sense, Shape, Stroke, StrokeKind, Ui, Vec2, Visuals};
use egui_plot::{LineStyle, PlotPoint, PlotTransform};

use crate::analysis::{palette, Class, LegendEntry};
use crate::charts::{Dash, ShadedRegion};

const SWATCH_SIZE: Vec2 = Vec2::new(14.0, 10.0);

/// egui_plot stroke pattern for a series dash
pub fn line_style(dash: Dash) -> LineStyle {
    match dash {
        Dash::Solid => LineStyle::Solid,
        Dash::Dashed => LineStyle::dashed_dense(),
        Dash::DashDot => LineStyle::dashed_loose(),
        Dash::Dotted => LineStyle::dotted_dense(),
    }
}

/// Swap pure black for the text color so it stays visible on dark panels
pub fn readable(color: Color32, visuals: &Visuals) -> Color32 {
    if color == palette::BLACK && visuals.dark_mode {
        visuals.strong_text_color()
    } else {
        color
    }
}

/// Centered chart title
pub fn chart_title(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.strong(title);
    });
}

/// One row of color swatches with labels; "No data" is drawn as an outline
pub fn legend_strip(ui: &mut Ui, title: Option<&str>, entries: &[LegendEntry]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        if let Some(title) = title {
            ui.label(egui::RichText::new(title).small().strong());
        }
        for entry in entries {
            let (rect, _) = ui.allocate_exact_size(SWATCH_SIZE, Sense::hover());
            let painter = ui.painter();
            if entry.class == Class::Missing {
                painter.rect_stroke(
                    rect,
                    1.0,
                    Stroke::new(1.0, palette::BOUNDARY_EDGE),
                    StrokeKind::Inside,
                );
            } else {
                painter.rect_filled(rect, 1.0, entry.color);
            }
            ui.label(egui::RichText::new(&entry.label).small());
        }
    });
}

/// Paint filled regions and their outlines in plot coordinates
pub fn paint_regions(
    painter: &egui::Painter,
    transform: &PlotTransform,
    regions: &[ShadedRegion],
    highlighted: Option<&str>,
    edge: Stroke,
) {
    let to_screen = |p: [f64; 2]| -> Pos2 { transform.position_from_point(&PlotPoint::new(p[0], p[1])) };

    let mut mesh = Mesh::default();
    for region in regions {
        let Some(fill) = region.fill else { continue };
        for triangle in &region.triangles {
            let base = mesh.vertices.len() as u32;
            for &corner in triangle {
                mesh.colored_vertex(to_screen(corner), fill);
            }
            mesh.add_triangle(base, base + 1, base + 2);
        }
    }
    painter.add(Shape::mesh(mesh));

    for region in regions {
        let stroke = if highlighted == Some(region.country.as_str()) {
            Stroke::new(edge.width * 2.5, palette::BLACK)
        } else {
            edge
        };
        for ring in region.rings() {
            let points: Vec<Pos2> = ring.into_iter().map(to_screen).collect();
            painter.add(Shape::line(points, stroke));
        }
    }
}
