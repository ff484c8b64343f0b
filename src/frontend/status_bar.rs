//! Status bar panel - bottom bar showing dataset counts and the current selection.
//!
//! Sits below the dock workspace area.

use egui::{Color32, RichText, Ui};

use crate::data::DatasetSummary;
use crate::selection::Selection;

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub summary: &'a DatasetSummary,
    pub selection: &'a Selection,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    let summary = ctx.summary;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Load status dot ===
        let (status_color, status_text) = if summary.merged_rows > 0 {
            (Color32::GREEN, "Data loaded")
        } else {
            (Color32::YELLOW, "No merged rows")
        };
        ui.colored_label(status_color, "●");
        ui.label(RichText::new(status_text).small());

        ui.separator();

        ui.label(RichText::new(format!("Countries: {}", summary.indicator_countries)).small());

        ui.separator();

        let years = match (summary.first_year, summary.last_year) {
            (Some(first), Some(last)) => format!("Years: {}–{}", first, last),
            _ => "Years: none".to_string(),
        };
        ui.label(RichText::new(years).small());

        ui.separator();

        ui.label(RichText::new(format!("Merged rows: {}", summary.merged_rows)).small());

        ui.separator();

        // === Unmatched countries ===
        let unmatched_color = if summary.unmatched_countries > 0 {
            Color32::LIGHT_RED
        } else {
            Color32::GRAY
        };
        ui.colored_label(
            unmatched_color,
            RichText::new(format!("Unmatched: {}", summary.unmatched_countries)).small(),
        );

        // === Selection (right-aligned) ===
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let country = ctx.selection.country.as_deref().unwrap_or("no country");
            ui.label(
                RichText::new(format!("{} · {}", ctx.selection.map_view.label(), country)).small(),
            );
        });
    });
}
