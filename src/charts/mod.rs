//! Chart values built from the dataset
//!
//! Every builder here is a pure function of the loaded [`Dataset`](crate::data::Dataset)
//! and the current selection. The results are plain data (coordinates,
//! colors, labels) which the frontend panes hand to egui_plot; nothing in
//! this module draws.

pub mod choropleth;
pub mod linked;
pub mod trend;

pub use choropleth::{build_choropleth, ChoroplethChart, ShadedRegion};
pub use linked::{BoxMetric, LinkedPanel, MetricSummary, ScatterPoint, SecondaryViews, LINKED_PANEL_YEAR};
pub use trend::{build_country_trend, Dash, SeriesStyle, TrendChart, TrendSeries};
