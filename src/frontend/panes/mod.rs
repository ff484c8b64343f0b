//! Pane modules for the workspace
//!
//! Each pane provides a render function that takes its own state, SharedState, and &mut Ui.
//! Panes return Vec<AppAction> instead of mutating state directly.

pub mod country_trend;
pub mod linked_panel;
pub mod map_view;
pub mod overview;

pub use country_trend::CountryTrendState;
pub use linked_panel::LinkedPanelState;
pub use map_view::MapViewState;
pub use overview::OverviewState;
