//! TabViewer implementation for the workspace
//!
//! Dispatches rendering to the pane states through the `Pane` trait.

use std::collections::HashMap;

use egui::{Ui, WidgetText};

use crate::config::DashboardConfig;
use crate::data::Dataset;
use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::selection::Selection;

use super::{PaneEntry, PaneId};

/// Tab viewer that bridges egui_dock with our pane system.
///
/// Holds borrows of all shared state fields so that SharedState can be
/// constructed per-tab inside ui().
pub struct WorkspaceTabViewer<'a> {
    pub dataset: &'a Dataset,
    pub country_options: &'a [String],
    pub selection: &'a Selection,
    pub config: &'a DashboardConfig,
    // Workspace state
    pub pane_states: &'a mut HashMap<PaneId, Box<dyn Pane>>,
    pub pane_entries: &'a HashMap<PaneId, PaneEntry>,
    pub actions: Vec<AppAction>,
}

impl egui_dock::TabViewer for WorkspaceTabViewer<'_> {
    type Tab = PaneId;

    fn title(&mut self, tab: &mut PaneId) -> WidgetText {
        self.pane_entries
            .get(tab)
            .map(|e| WidgetText::from(&e.title))
            .unwrap_or_else(|| WidgetText::from("Unknown"))
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut PaneId) {
        let Some(pane) = self.pane_states.get_mut(tab) else {
            ui.label("Pane state not found");
            return;
        };

        let mut shared = SharedState {
            dataset: self.dataset,
            country_options: self.country_options,
            selection: self.selection,
            config: self.config,
        };

        let pane_actions = pane.render(&mut shared, ui);
        self.actions.extend(pane_actions);
    }

    fn id(&mut self, tab: &mut PaneId) -> egui::Id {
        egui::Id::new(("pane", tab.0))
    }

    fn on_close(&mut self, tab: &mut PaneId) -> egui_dock::widgets::tab_viewer::OnCloseResponse {
        // Allow closing; cleanup happens in the main app
        self.actions.push(AppAction::ClosePane(*tab));
        egui_dock::widgets::tab_viewer::OnCloseResponse::Close
    }

    fn closeable(&mut self, _tab: &mut PaneId) -> bool {
        true
    }
}
