//! Dashboard selectors
//!
//! The dashboard has two independent choice points: which map to show and
//! which country to trace over time. The linked panel has no selector; its
//! only input is the brush drawn on the scatter plot, which lives in the
//! pane itself.
//!
//! A [`Selection`] is plain data. Changing it never touches the dataset; the
//! panes notice the new value on the next frame and rebuild their charts.

use std::fmt;

use crate::analysis::ClassificationScheme;
use crate::data::Dataset;
use crate::types::{Indicator, FIRST_YEAR, LAST_YEAR};

/// Which choropleth to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapView {
    #[default]
    Year1970,
    Year2020,
    TfrDifference,
}

impl MapView {
    pub const ALL: [MapView; 3] = [MapView::Year1970, MapView::Year2020, MapView::TfrDifference];

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            MapView::Year1970 => "Year 1970",
            MapView::Year2020 => "Year 2020",
            MapView::TfrDifference => "TFR Difference",
        }
    }

    /// Chart title
    pub fn title(&self) -> &'static str {
        match self {
            MapView::Year1970 => "Total Fertility Rate in 1970",
            MapView::Year2020 => "Total Fertility Rate in 2020",
            MapView::TfrDifference => "50 Years Total Fertility Rate Change",
        }
    }

    /// Year whose merged rows are drawn
    ///
    /// The difference is stored on the last-year rows.
    pub fn year(&self) -> i32 {
        match self {
            MapView::Year1970 => FIRST_YEAR,
            MapView::Year2020 | MapView::TfrDifference => LAST_YEAR,
        }
    }

    /// Column that colors the map
    pub fn indicator(&self) -> Indicator {
        match self {
            MapView::Year1970 | MapView::Year2020 => Indicator::Tfr,
            MapView::TfrDifference => Indicator::TfrDiff,
        }
    }

    pub fn scheme(&self) -> ClassificationScheme {
        match self {
            MapView::Year1970 | MapView::Year2020 => ClassificationScheme::tfr_snapshot(),
            MapView::TfrDifference => ClassificationScheme::tfr_difference(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current value of both selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub map_view: MapView,
    /// `None` only when the indicator table is empty
    pub country: Option<String>,
}

impl Selection {
    /// Initial selection: first map view and first listed country
    pub fn initial(country_options: &[String]) -> Self {
        Self {
            map_view: MapView::default(),
            country: country_options.first().cloned(),
        }
    }

    /// Initial selection for a loaded dataset
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::initial(&dataset.country_options())
    }

    /// Change the map view; returns whether it changed
    pub fn set_map_view(&mut self, view: MapView) -> bool {
        if self.map_view == view {
            return false;
        }
        self.map_view = view;
        true
    }

    /// Change the country if it is one of the options; returns whether it changed
    pub fn set_country(&mut self, country: &str, options: &[String]) -> bool {
        if self.country.as_deref() == Some(country) {
            return false;
        }
        if !options.iter().any(|o| o == country) {
            tracing::warn!("Ignoring unknown country selection '{}'", country);
            return false;
        }
        self.country = Some(country.to_string());
        true
    }

    /// Selected country, or an empty name when there is none
    pub fn country_or_empty(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Afghanistan".to_string(), "Albania".to_string()]
    }

    #[test]
    fn test_initial_selection() {
        let sel = Selection::initial(&options());
        assert_eq!(sel.map_view, MapView::Year1970);
        assert_eq!(sel.country.as_deref(), Some("Afghanistan"));
        assert_eq!(Selection::initial(&[]).country, None);
    }

    #[test]
    fn test_map_view_metadata() {
        assert_eq!(MapView::TfrDifference.year(), 2020);
        assert_eq!(MapView::TfrDifference.indicator(), Indicator::TfrDiff);
        assert_eq!(MapView::Year1970.indicator(), Indicator::Tfr);
        assert_eq!(MapView::Year1970.year(), 1970);
        assert_eq!(MapView::from_label("Year 2020"), Some(MapView::Year2020));
        assert_eq!(MapView::from_label("Year 1990"), None);
    }

    #[test]
    fn test_set_map_view_reports_change() {
        let mut sel = Selection::initial(&options());
        assert!(sel.set_map_view(MapView::Year2020));
        assert!(!sel.set_map_view(MapView::Year2020));
    }

    #[test]
    fn test_set_country_validates() {
        let mut sel = Selection::initial(&options());
        assert!(sel.set_country("Albania", &options()));
        assert!(!sel.set_country("Albania", &options()));
        assert!(!sel.set_country("Atlantis", &options()));
        assert_eq!(sel.country_or_empty(), "Albania");
    }
}
