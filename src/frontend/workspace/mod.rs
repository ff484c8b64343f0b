//! Workspace module for dockable pane management
//!
//! Provides the core workspace types: PaneId, PaneKind, Workspace.
//! Uses egui_dock for drag-and-drop docking, tabs, and splits.

pub mod default_layout;
pub mod tab_viewer;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::frontend::pane_registry::{self, PaneKindInfo};
use crate::frontend::pane_trait::Pane;

/// Unique identifier for a pane instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub u64);

static NEXT_PANE_ID: AtomicU64 = AtomicU64::new(1);

impl PaneId {
    pub fn next() -> Self {
        Self(NEXT_PANE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// Kind of pane (used for dispatch and menu display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneKind {
    Overview,
    Map,
    LinkedPanel,
    CountryTrend,
}

impl PaneKind {
    pub const ALL: [PaneKind; 4] = [
        PaneKind::Overview,
        PaneKind::Map,
        PaneKind::LinkedPanel,
        PaneKind::CountryTrend,
    ];
}

/// Metadata entry for a pane
pub struct PaneEntry {
    pub id: PaneId,
    pub kind: PaneKind,
    pub title: String,
}

/// The workspace holds all dock state, pane data, and the pane registry.
pub struct Workspace {
    pub dock_state: egui_dock::DockState<PaneId>,
    pub pane_states: HashMap<PaneId, Box<dyn Pane>>,
    pub pane_entries: HashMap<PaneId, PaneEntry>,
    registry: Vec<PaneKindInfo>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create an empty workspace with the pane registry.
    pub fn new() -> Self {
        Self {
            dock_state: egui_dock::DockState::new(vec![]),
            pane_states: HashMap::new(),
            pane_entries: HashMap::new(),
            registry: pane_registry::build_registry(),
        }
    }

    /// Create a workspace with the default layout.
    pub fn with_default_layout() -> Self {
        let mut workspace = Self::new();
        workspace.dock_state = default_layout::build_default_layout(&mut workspace);
        workspace
    }

    /// Drop every pane and rebuild the default layout.
    pub fn reset(&mut self) {
        self.pane_states.clear();
        self.pane_entries.clear();
        self.dock_state = default_layout::build_default_layout(self);
    }

    fn info(&self, kind: PaneKind) -> Option<&PaneKindInfo> {
        self.registry.iter().find(|info| info.kind == kind)
    }

    /// Register a new pane and return its ID.
    pub fn register_pane(&mut self, kind: PaneKind, title: impl Into<String>) -> PaneId {
        let id = PaneId::next();
        let state = (pane_registry::info(kind).factory)();

        self.pane_states.insert(id, state);
        self.pane_entries.insert(
            id,
            PaneEntry {
                id,
                kind,
                title: title.into(),
            },
        );

        id
    }

    /// Look up the display name for a pane kind from the registry.
    pub fn display_name(&self, kind: PaneKind) -> &'static str {
        self.info(kind).map(|info| info.display_name).unwrap_or("Unknown")
    }

    /// Check whether a pane kind is a singleton.
    pub fn is_singleton(&self, kind: PaneKind) -> bool {
        self.info(kind).is_some_and(|info| info.is_singleton)
    }

    /// Iterate all registered pane kinds in menu order.
    pub fn registry(&self) -> impl Iterator<Item = &PaneKindInfo> {
        self.registry.iter()
    }

    /// Find an existing pane of the given kind.
    pub fn find_pane(&self, kind: PaneKind) -> Option<PaneId> {
        self.pane_entries
            .values()
            .find(|e| e.kind == kind)
            .map(|e| e.id)
    }

    /// Open a pane of the given kind, focusing an existing singleton.
    pub fn open_pane(&mut self, kind: PaneKind) -> PaneId {
        if self.is_singleton(kind) {
            if let Some(id) = self.find_pane(kind) {
                if let Some(tab_location) = self.dock_state.find_tab(&id) {
                    self.dock_state.set_active_tab(tab_location);
                }
                return id;
            }
        }

        let name = self.display_name(kind);
        let id = self.register_pane(kind, name);
        self.dock_state.push_to_first_leaf(id);
        id
    }

    /// Remove a pane by ID.
    pub fn remove_pane(&mut self, id: PaneId) {
        self.pane_states.remove(&id);
        self.pane_entries.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_every_pane() {
        let ws = Workspace::with_default_layout();
        for kind in PaneKind::ALL {
            let id = ws.find_pane(kind).unwrap();
            assert!(ws.dock_state.find_tab(&id).is_some());
        }
        assert_eq!(ws.pane_states.len(), PaneKind::ALL.len());
    }

    #[test]
    fn test_open_singleton_focuses_existing() {
        let mut ws = Workspace::with_default_layout();
        let existing = ws.find_pane(PaneKind::Map).unwrap();
        assert_eq!(ws.open_pane(PaneKind::Map), existing);
        assert_eq!(ws.pane_entries.len(), PaneKind::ALL.len());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut ws = Workspace::with_default_layout();
        let id = ws.find_pane(PaneKind::CountryTrend).unwrap();
        ws.remove_pane(id);
        assert!(ws.find_pane(PaneKind::CountryTrend).is_none());

        let reopened = ws.open_pane(PaneKind::CountryTrend);
        assert_ne!(reopened, id);
        assert!(ws.dock_state.find_tab(&reopened).is_some());
    }
}
