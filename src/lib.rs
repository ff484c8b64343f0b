//! # TFR Dashboard: fertility rates against development indicators
//!
//! An interactive dashboard that relates the Total Fertility Rate (TFR) of
//! every country to World Bank economic and social indicators. Two sources
//! are loaded once at startup, a yearly indicator CSV and a world boundary
//! GeoJSON, and joined on country name. Everything after that is a pure
//! function of the loaded tables and the current selection.
//!
//! ## Architecture
//!
//! - **Data**: CSV/GeoJSON loading and the inner join ([`data`])
//! - **Analysis**: classification schemes, brush filtering, box plot
//!   summaries and min–max scaling shared by the charts ([`analysis`])
//! - **Charts**: chart values for the choropleth, the linked scatter panel
//!   and the country trend ([`charts`])
//! - **Frontend**: eframe/egui window with an egui_dock workspace of panes
//!   that draw those values with egui_plot ([`frontend`])
//!
//! ## Configuration
//!
//! Dataset paths and sizing come from `dashboard.toml` (working directory
//! first, then the app data directory). UI preferences are stored in the
//! platform-appropriate data directory under `tfr-dashboard`:
//!
//! - **Linux**: `~/.local/share/tfr-dashboard/`
//! - **macOS**: `~/Library/Application Support/tfr-dashboard/`
//! - **Windows**: `%APPDATA%\tfr-dashboard\`
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tfr_dashboard::{
//!     config::{AppState, DashboardConfig},
//!     data::Dataset,
//!     frontend::DashboardApp,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::load_or_default()?;
//!     let dataset = Arc::new(Dataset::load(&config.data)?);
//!     let app_state = AppState::load_or_default();
//!
//!     eframe::run_native(
//!         "TFR Dashboard",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, dataset, config, app_state)))),
//!     )
//!     .map_err(|e| anyhow::anyhow!(e.to_string()))
//! }
//! ```

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod frontend;
pub mod selection;
pub mod types;

// Re-export commonly used types
pub use config::{AppState, DashboardConfig};
pub use data::{Dataset, DatasetSummary};
pub use error::{DashboardError, Result};
pub use frontend::DashboardApp;
pub use selection::{MapView, Selection};
pub use types::{GeoRecord, Indicator, IndicatorRecord, MergedRecord};
