//! Default workspace layout
//!
//! Builds the initial dock layout with the map on top, the linked panel and
//! the country trend side by side below it, and the overview as a tab behind
//! the map.

use egui_dock::{DockState, NodeIndex};

use super::{PaneId, PaneKind, Workspace};

/// Build the default dock layout and return the DockState.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ [TFR Map]  [Overview]                       │
/// │                                             │
/// │               Choropleth                    │
/// ├──────────────────────────┬──────────────────┤
/// │  Economic Indicators     │  Country Trend   │
/// │  (scatter + summaries)   │                  │
/// └──────────────────────────┴──────────────────┘
/// ```
pub fn build_default_layout(workspace: &mut Workspace) -> DockState<PaneId> {
    let map_id = workspace.register_pane(PaneKind::Map, workspace.display_name(PaneKind::Map));
    let overview_id =
        workspace.register_pane(PaneKind::Overview, workspace.display_name(PaneKind::Overview));
    let linked_id = workspace.register_pane(
        PaneKind::LinkedPanel,
        workspace.display_name(PaneKind::LinkedPanel),
    );
    let trend_id = workspace.register_pane(
        PaneKind::CountryTrend,
        workspace.display_name(PaneKind::CountryTrend),
    );

    // Map is the main tab, overview behind it
    let mut dock = DockState::new(vec![map_id, overview_id]);

    // Bottom half for the linked panel
    let [_top, bottom] = dock
        .main_surface_mut()
        .split_below(NodeIndex::root(), 0.5, vec![linked_id]);

    // Country trend to the right of the linked panel
    dock.main_surface_mut()
        .split_right(bottom, 0.6, vec![trend_id]);

    dock
}
