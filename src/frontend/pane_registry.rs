//! Pane registry - data-driven pane registration.
//!
//! The registry is the single source of truth for all pane kinds:
//! display names, singleton flags, and factory functions.
//! The View menu and workspace pane creation are driven from this data.

use crate::frontend::pane_trait::Pane;
use crate::frontend::panes::{CountryTrendState, LinkedPanelState, MapViewState, OverviewState};
use crate::frontend::workspace::PaneKind;

/// Metadata for a pane kind, including its factory function.
pub struct PaneKindInfo {
    pub kind: PaneKind,
    pub display_name: &'static str,
    pub is_singleton: bool,
    pub factory: fn() -> Box<dyn Pane>,
}

/// Registry entry of one pane kind.
pub fn info(kind: PaneKind) -> PaneKindInfo {
    match kind {
        PaneKind::Overview => PaneKindInfo {
            kind,
            display_name: "Overview",
            is_singleton: true,
            factory: || Box::new(OverviewState::default()),
        },
        PaneKind::Map => PaneKindInfo {
            kind,
            display_name: "TFR Map",
            is_singleton: true,
            factory: || Box::new(MapViewState::default()),
        },
        PaneKind::LinkedPanel => PaneKindInfo {
            kind,
            display_name: "Economic Indicators",
            is_singleton: true,
            factory: || Box::new(LinkedPanelState::default()),
        },
        PaneKind::CountryTrend => PaneKindInfo {
            kind,
            display_name: "Country Trend",
            is_singleton: true,
            factory: || Box::new(CountryTrendState::default()),
        },
    }
}

/// Build the pane registry with all known pane kinds, in menu order.
pub fn build_registry() -> Vec<PaneKindInfo> {
    PaneKind::ALL.into_iter().map(info).collect()
}
