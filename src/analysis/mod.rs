//! Analysis module for the dashboard charts
//!
//! This module provides the chart-independent computations:
//! - Bucketed color classification with legends
//! - Rectangular brush selection
//! - Box-plot summaries and category counts
//! - Min-max scaling for the trend lines

pub mod brush;
pub mod classify;
pub mod palette;
pub mod scale;
pub mod summary;

pub use brush::Brush;
pub use classify::{Class, ClassificationScheme, EdgePolicy, LegendEntry};
pub use scale::{normalize_unit, UnitScale};
pub use summary::{count_by, BoxSummary};
