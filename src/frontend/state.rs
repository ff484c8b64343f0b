//! Shared state types for the frontend
//!
//! This module defines the shared state container and action types used by
//! the workspace-based architecture. Panes receive `SharedState` via borrowing
//! and return `AppAction`s instead of mutating state directly.

use crate::config::DashboardConfig;
use crate::data::Dataset;
use crate::selection::{MapView, Selection};

use super::workspace::{PaneId, PaneKind};

/// Shared state accessible by all panes (borrowed, not owned).
///
/// The dataset and the selection are read-only here; a pane that wants to
/// change the selection returns an action.
pub struct SharedState<'a> {
    // Data (read-only)
    pub dataset: &'a Dataset,
    pub country_options: &'a [String],

    // Selectors (read-only, changed through actions)
    pub selection: &'a Selection,

    // Configuration
    pub config: &'a DashboardConfig,
}

/// Actions that any pane or panel can emit
///
/// Panes return `Vec<AppAction>` instead of mutating state directly; the app
/// applies them after the dock has been drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Selectors
    /// Show another choropleth
    SelectMapView(MapView),
    /// Trace another country in the trend chart
    SelectCountry(String),

    // Preferences
    /// Switch between dark and light visuals
    SetDarkMode(bool),

    // Workspace actions
    /// Open/focus a pane, or create it if it does not exist
    OpenPane(PaneKind),
    /// Close a pane (remove from dock and clean up state)
    ClosePane(PaneId),
    /// Rebuild the default dock layout
    ResetLayout,
}
