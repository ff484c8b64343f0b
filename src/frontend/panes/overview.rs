//! Overview pane - what the dashboard shows and what was loaded

use egui::{RichText, ScrollArea, Ui};

use crate::data::DatasetSummary;
use crate::frontend::pane_registry;
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;
use crate::types::Indicator;

const INTRO: &str = "Fertility rates have fallen in most of the world over the last fifty \
years. The map compares 1970 with 2020, the economic indicators relate fertility to \
income and development, and the country trend follows one country through time.";

const TFR_DEFINITION: &str = "The total fertility rate (TFR) is the number of children a \
woman would have over her lifetime if she experienced the current age-specific \
fertility rates. A TFR of about 2.1 keeps a population stable without migration.";

/// What each chart pane shows, in menu order
const CHART_NOTES: &[(PaneKind, &str)] = &[
    (
        PaneKind::Map,
        "World maps of TFR in 1970 and 2020, and of the change between them. Deep blue \
is low fertility, salmon medium, dark red high and dark purple extreme.",
    ),
    (
        PaneKind::LinkedPanel,
        "TFR against log average GDP in 2020, colored by TFR level. Drag a rectangle to \
select countries; the bars count them by continent and the box plots summarize their \
education, labor participation, life expectancy and contraceptive prevalence.",
    ),
    (
        PaneKind::CountryTrend,
        "Seven indicators of the selected country from 1970 to 2020, each rescaled to \
0-1 so their shapes can be compared. Hover a line for the observed value.",
    ),
];

const CLOSING: &str = "Fertility has fallen almost everywhere, most sharply in Asia, the \
Middle East, North Africa and Latin America. It tracks income and education closely \
across countries, yet single countries often follow their own path.";

/// State for the overview pane
#[derive(Default)]
pub struct OverviewState {
    /// Summary computed on first render
    summary: Option<DatasetSummary>,
}

/// Render the overview pane
pub fn render(state: &mut OverviewState, shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let summary = *state.summary.get_or_insert_with(|| shared.dataset.summary());

    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Total Fertility Rate Dashboard");
        ui.label(INTRO);
        ui.add_space(8.0);

        ui.label(RichText::new("Total fertility rate").strong());
        ui.label(TFR_DEFINITION);
        ui.add_space(8.0);

        for (kind, note) in CHART_NOTES {
            ui.label(RichText::new(pane_registry::info(*kind).display_name).strong());
            ui.label(*note);
            ui.add_space(4.0);
        }
        ui.label(CLOSING);
        ui.add_space(8.0);

        ui.label(RichText::new("Indicators").strong());
        egui::Grid::new("overview_indicators")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.label(RichText::new("Column").small());
                ui.label(RichText::new("Indicator").small());
                ui.label(RichText::new("Source series").small());
                ui.end_row();

                for indicator in Indicator::all() {
                    ui.monospace(indicator.column());
                    ui.label(indicator.label());
                    ui.monospace(indicator.world_bank_code().unwrap_or("derived"));
                    ui.end_row();
                }
            });
        ui.add_space(8.0);

        ui.label(RichText::new("Loaded data").strong());
        summary_grid(ui, &summary);

        let unmatched = shared.dataset.unmatched_countries();
        if !unmatched.is_empty() {
            ui.add_space(4.0);
            ui.collapsing(
                format!("{} countries without a boundary", unmatched.len()),
                |ui| {
                    for country in unmatched {
                        ui.label(country);
                    }
                },
            );
        }
    });

    Vec::new()
}

fn summary_grid(ui: &mut Ui, summary: &DatasetSummary) {
    let years = match (summary.first_year, summary.last_year) {
        (Some(first), Some(last)) => format!("{}–{}", first, last),
        _ => "none".to_string(),
    };

    egui::Grid::new("overview_summary").num_columns(2).show(ui, |ui| {
        let rows = [
            ("Countries", summary.indicator_countries.to_string()),
            ("Years", years),
            ("Indicator rows", summary.indicator_rows.to_string()),
            ("Boundaries", summary.boundaries.to_string()),
            ("Merged rows", summary.merged_rows.to_string()),
            ("Countries on the map", summary.merged_countries.to_string()),
            ("Unmatched countries", summary.unmatched_countries.to_string()),
        ];
        for (label, value) in rows {
            ui.label(label);
            ui.label(value);
            ui.end_row();
        }
    });
}

impl Pane for OverviewState {
    fn kind(&self) -> PaneKind {
        PaneKind::Overview
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chart_pane_is_described() {
        for kind in PaneKind::ALL {
            let described = CHART_NOTES.iter().any(|(k, _)| *k == kind);
            assert_eq!(described, kind != PaneKind::Overview, "{:?}", kind);
        }
    }

    #[test]
    fn test_chart_notes_follow_menu_order() {
        let kinds: Vec<PaneKind> = CHART_NOTES.iter().map(|(k, _)| *k).collect();
        let menu: Vec<PaneKind> = PaneKind::ALL
            .into_iter()
            .filter(|k| *k != PaneKind::Overview)
            .collect();
        assert_eq!(kinds, menu);
    }
}
