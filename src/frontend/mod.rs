//! Frontend module for egui UI
//!
//! This module provides the dashboard window using eframe/egui. The dataset
//! is loaded once before the window opens; every frame renders the charts as
//! a function of that dataset and the current [`Selection`].
//!
//! # Architecture
//!
//! The frontend uses an egui_dock workspace where every chart is a pane:
//! overview, TFR map, economic indicators, country trend. Panes can be
//! rearranged via drag-and-drop docking. The two selectors live in a side
//! panel next to the dock and are the only way the selection changes, apart
//! from clicking a country on the map.
//!
//! # Main Types
//!
//! - [`DashboardApp`] - Main application state implementing [`eframe::App`]
//! - [`Workspace`] - Dock state and pane management
//!
//! # Submodules
//!
//! - `workspace` - Dock workspace, tab viewer, default layout
//! - `panes` - Individual pane render functions
//! - `plot` - Plot helpers shared by the chart panes
//! - `status_bar` - Dataset counts below the dock

pub mod pane_registry;
pub mod pane_trait;
pub mod panes;
mod plot;
pub mod state;
mod status_bar;
pub mod workspace;

pub use state::{AppAction, SharedState};
pub use workspace::{PaneId, PaneKind, Workspace};

use std::sync::Arc;

use crate::config::{AppState, DashboardConfig};
use crate::data::{Dataset, DatasetSummary};
use crate::selection::{MapView, Selection};
use status_bar::{render_status_bar, StatusBarContext};
use workspace::tab_viewer::WorkspaceTabViewer;

const SIDE_PANEL_WIDTH: f32 = 240.0;

/// Main application state
pub struct DashboardApp {
    /// Loaded tables, shared read-only with every pane
    dataset: Arc<Dataset>,
    /// Countries offered by the country selector
    country_options: Vec<String>,
    summary: DatasetSummary,
    selection: Selection,
    config: DashboardConfig,
    app_state: AppState,
    workspace: Workspace,
}

impl DashboardApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        dataset: Arc<Dataset>,
        config: DashboardConfig,
        app_state: AppState,
    ) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.text_styles.iter_mut().for_each(|(_, font_id)| {
            font_id.size *= app_state.ui_preferences.font_scale;
        });
        cc.egui_ctx.set_style(style);

        Self::from_parts(dataset, config, app_state)
    }

    /// Build the app state without a window
    pub fn from_parts(dataset: Arc<Dataset>, config: DashboardConfig, app_state: AppState) -> Self {
        let country_options = dataset.country_options();
        let selection = Selection::initial(&country_options);
        let summary = dataset.summary();

        tracing::info!(
            "Dashboard ready: {} countries, {} merged rows, initial country {:?}",
            country_options.len(),
            summary.merged_rows,
            selection.country
        );

        Self {
            dataset,
            country_options,
            summary,
            selection,
            config,
            app_state,
            workspace: Workspace::with_default_layout(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Apply one action emitted by a pane or panel
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::SelectMapView(view) => {
                if self.selection.set_map_view(view) {
                    tracing::debug!("Map view set to {}", view);
                }
            }
            AppAction::SelectCountry(country) => {
                if self.selection.set_country(&country, &self.country_options) {
                    tracing::debug!("Country set to {}", country);
                }
            }
            AppAction::SetDarkMode(dark_mode) => {
                self.app_state.ui_preferences.dark_mode = dark_mode;
            }
            AppAction::OpenPane(kind) => {
                self.workspace.open_pane(kind);
            }
            AppAction::ClosePane(id) => {
                self.workspace.remove_pane(id);
            }
            AppAction::ResetLayout => {
                self.workspace.reset();
            }
        }
    }

    fn render_selectors(&self, ui: &mut egui::Ui) -> Vec<AppAction> {
        let mut actions = Vec::new();

        ui.label(egui::RichText::new("Which chart do you want to visualize?").strong());
        let mut view = self.selection.map_view;
        egui::ComboBox::from_id_salt("map_view_selector")
            .width(ui.available_width())
            .selected_text(view.label())
            .show_ui(ui, |ui| {
                for option in MapView::ALL {
                    ui.selectable_value(&mut view, option, option.label());
                }
            });
        if view != self.selection.map_view {
            actions.push(AppAction::SelectMapView(view));
        }

        ui.add_space(12.0);

        ui.label(egui::RichText::new("Which country do you want to visualize?").strong());
        let current = self.selection.country_or_empty();
        egui::ComboBox::from_id_salt("country_selector")
            .width(ui.available_width())
            .selected_text(current)
            .height(320.0)
            .show_ui(ui, |ui| {
                for country in &self.country_options {
                    if ui
                        .selectable_label(country.as_str() == current, country.as_str())
                        .clicked()
                        && country.as_str() != current
                    {
                        actions.push(AppAction::SelectCountry(country.clone()));
                    }
                }
            });
        if self.country_options.is_empty() {
            ui.label(egui::RichText::new("No countries loaded").small().weak());
        }

        actions
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    // Panes (open/focus) - auto-generated from registry
                    for info in self.workspace.registry() {
                        if ui.button(info.display_name).clicked() {
                            actions.push(AppAction::OpenPane(info.kind));
                            ui.close();
                        }
                    }

                    ui.separator();

                    if ui.button("Reset layout").clicked() {
                        actions.push(AppAction::ResetLayout);
                        ui.close();
                    }

                    let mut dark_mode = self.app_state.ui_preferences.dark_mode;
                    if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                        actions.push(AppAction::SetDarkMode(dark_mode));
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    summary: &self.summary,
                    selection: &self.selection,
                },
            );
        });

        egui::SidePanel::left("selectors")
            .resizable(true)
            .default_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                actions.extend(self.render_selectors(ui));
            });

        // Dock workspace
        {
            let mut viewer = WorkspaceTabViewer {
                dataset: &self.dataset,
                country_options: &self.country_options,
                selection: &self.selection,
                config: &self.config,
                pane_states: &mut self.workspace.pane_states,
                pane_entries: &self.workspace.pane_entries,
                actions: Vec::new(),
            };

            egui_dock::DockArea::new(&mut self.workspace.dock_state)
                .style(egui_dock::Style::from_egui(ctx.style().as_ref()))
                .show(ctx, &mut viewer);

            actions.extend(viewer.actions);
        }

        let dark_mode = self.app_state.ui_preferences.dark_mode;
        for action in actions {
            self.handle_action(action);
        }
        if self.app_state.ui_preferences.dark_mode != dark_mode {
            ctx.set_visuals(if self.app_state.ui_preferences.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndicatorRecord;

    fn app() -> DashboardApp {
        let mut a = IndicatorRecord::new("Brazil", 2020);
        a.tfr = Some(1.6);
        let mut b = IndicatorRecord::new("Angola", 2020);
        b.tfr = Some(5.4);
        let dataset = Dataset::from_tables(Vec::new(), vec![a, b]);
        DashboardApp::from_parts(Arc::new(dataset), DashboardConfig::default(), AppState::default())
    }

    #[test]
    fn test_initial_selection() {
        let app = app();
        assert_eq!(app.selection().map_view, MapView::Year1970);
        assert_eq!(app.selection().country.as_deref(), Some("Brazil"));
    }

    #[test]
    fn test_select_actions() {
        let mut app = app();
        app.handle_action(AppAction::SelectMapView(MapView::TfrDifference));
        app.handle_action(AppAction::SelectCountry("Angola".to_string()));
        assert_eq!(app.selection().map_view, MapView::TfrDifference);
        assert_eq!(app.selection().country.as_deref(), Some("Angola"));

        // Unknown country keeps the previous one
        app.handle_action(AppAction::SelectCountry("Atlantis".to_string()));
        assert_eq!(app.selection().country.as_deref(), Some("Angola"));
    }

    #[test]
    fn test_dark_mode_action() {
        let mut app = app();
        app.handle_action(AppAction::SetDarkMode(false));
        assert!(!app.app_state().ui_preferences.dark_mode);
    }

    #[test]
    fn test_close_and_reopen_pane() {
        let mut app = app();
        let id = app.workspace().find_pane(PaneKind::CountryTrend).unwrap();
        app.handle_action(AppAction::ClosePane(id));
        assert!(app.workspace().find_pane(PaneKind::CountryTrend).is_none());

        app.handle_action(AppAction::OpenPane(PaneKind::CountryTrend));
        assert!(app.workspace().find_pane(PaneKind::CountryTrend).is_some());
    }
}
