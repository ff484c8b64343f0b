//! Integration tests: load both sources from disk and build every chart

mod common;

use common::builders::{self, DatasetFiles, RowBuilder};
use tfr_dashboard::analysis::{Brush, Class};
use tfr_dashboard::charts::{build_choropleth, build_country_trend, LinkedPanel, LINKED_PANEL_YEAR};
use tfr_dashboard::config::DataConfig;
use tfr_dashboard::{DashboardError, Dataset, MapView, Selection};

fn load_sample() -> Dataset {
    let files = DatasetFiles::sample();
    Dataset::load(&files.config).unwrap()
}

#[test]
fn test_load_and_join() {
    let dataset = load_sample();
    let summary = dataset.summary();

    assert_eq!(summary.boundaries, 5);
    assert_eq!(summary.indicator_rows, 10);
    assert_eq!(summary.indicator_countries, 5);
    // Islandia has no boundary, Nowhere has no indicators
    assert_eq!(summary.merged_countries, 4);
    assert_eq!(summary.merged_rows, 8);
    assert_eq!(dataset.unmatched_countries(), ["Islandia".to_string()]);
    assert_eq!(summary.first_year, Some(1970));
    assert_eq!(summary.last_year, Some(2020));

    for row in dataset.merged() {
        let geo = dataset
            .geometry()
            .iter()
            .find(|g| g.name == row.country())
            .unwrap();
        assert_eq!(row.continent, geo.continent);
        assert!(dataset.indicators().iter().any(|r| r.country == row.country()));
    }
}

#[test]
fn test_country_options_come_from_indicators() {
    let dataset = load_sample();
    assert_eq!(
        dataset.country_options(),
        vec!["Northland", "Southland", "Eastland", "Westland", "Islandia"]
    );

    let selection = Selection::for_dataset(&dataset);
    assert_eq!(selection.map_view, MapView::Year1970);
    assert_eq!(selection.country.as_deref(), Some("Northland"));
}

#[test]
fn test_given_diff_matches_recomputed() {
    let dataset = load_sample();
    assert!(dataset.diff_mismatches(1e-9).is_empty());
    common::assert_float_eq(dataset.tfr_change("Eastland", 1970, 2020).unwrap(), -4.0, 1e-9);
}

#[test]
fn test_snapshot_maps() {
    let dataset = load_sample();

    let map_2020 = build_choropleth(&dataset, MapView::Year2020);
    assert_eq!(map_2020.regions.len(), 4);
    let class_of = |chart: &tfr_dashboard::charts::ChoroplethChart, country: &str| {
        chart.regions.iter().find(|r| r.country == country).unwrap().class
    };
    assert_eq!(class_of(&map_2020, "Eastland"), Class::Bucket(0));
    assert_eq!(class_of(&map_2020, "Northland"), Class::Bucket(1));
    assert_eq!(class_of(&map_2020, "Westland"), Class::Bucket(3));
    assert_eq!(class_of(&map_2020, "Southland"), Class::Bucket(4));

    let map_1970 = build_choropleth(&dataset, MapView::Year1970);
    assert_eq!(class_of(&map_1970, "Westland"), Class::Bucket(2));
    assert_eq!(class_of(&map_1970, "Northland"), Class::Bucket(3));
    assert_eq!(map_1970.count(Class::Bucket(4)), 2);
}

#[test]
fn test_difference_map_marks_increase_out_of_range() {
    let dataset = load_sample();
    let chart = build_choropleth(&dataset, MapView::TfrDifference);

    let westland = chart.regions.iter().find(|r| r.country == "Westland").unwrap();
    assert_eq!(westland.class, Class::OutOfRange);
    assert!(westland.fill.is_some());
    assert!(chart.legend.iter().any(|e| e.class == Class::OutOfRange));

    assert_eq!(chart.region_at(12.5, 2.5).unwrap().country, "Southland");
    assert_eq!(chart.region_at(12.5, 2.5).unwrap().class, Class::Bucket(1));
    assert!(chart.region_at(7.5, 2.5).is_none());
}

#[test]
fn test_map_view_from_missing_year_is_blank() {
    let rows = vec![RowBuilder::new("Northland", 1990).tfr(2.0).build()];
    let files = DatasetFiles::write(&builders::sample_geometry(), &rows);
    let dataset = Dataset::load(&files.config).unwrap();

    for view in MapView::ALL {
        let chart = build_choropleth(&dataset, view);
        assert!(chart.is_empty());
        assert!(chart.bounds().is_none());
    }
}

#[test]
fn test_brush_filters_secondary_views() {
    let dataset = load_sample();
    let panel = LinkedPanel::build(&dataset, LINKED_PANEL_YEAR);
    assert_eq!(panel.points.len(), 4);

    let all = panel.secondary(None);
    assert_eq!(all.selected, 4);
    assert_eq!(all.continents.iter().map(|(_, n)| n).sum::<usize>(), 4);

    // Rich, low-fertility corner: Northland and Eastland
    let brush = Brush::from_corners([10.0, 0.5], [11.0, 2.0]);
    let views = panel.secondary(Some(&brush));
    assert_eq!(views.selected, 2);
    assert_eq!(
        views.continents,
        vec![("Asia".to_string(), 1), ("Europe".to_string(), 1)]
    );
    assert_eq!(views.boxes.len(), 4);

    // Clearing the brush restores every row
    assert_eq!(panel.secondary(None), all);
}

#[test]
fn test_trend_for_selected_country() {
    let dataset = load_sample();
    let chart = build_country_trend(dataset.indicators(), "Northland");

    assert_eq!(chart.series.len(), 7);
    assert_eq!(chart.years, Some((1970, 2020)));

    let tfr = &chart.series[0];
    assert_eq!(tfr.segments, vec![vec![[1970.0, 1.0], [2020.0, 0.0]]]);

    // Avg GDP only has the 2020 value: a single-point segment at mid scale
    let gdp = &chart.series[1];
    assert_eq!(gdp.segments, vec![vec![[2020.0, 0.5]]]);

    let unknown = build_country_trend(dataset.indicators(), "Atlantis");
    assert_eq!(unknown.series.len(), 7);
    assert!(unknown.is_blank());
}

#[test]
fn test_missing_file_is_fatal() {
    let files = DatasetFiles::sample();
    let config = DataConfig {
        indicators: files.path("absent.csv"),
        ..files.config.clone()
    };

    let err = Dataset::load(&config).unwrap_err();
    assert!(matches!(err.root(), DashboardError::MissingFile(_)));
}

#[test]
fn test_missing_required_column_is_fatal() {
    let files = DatasetFiles::sample();
    std::fs::write(&files.config.indicators, "country,tfr\nNorthland,2.0\n").unwrap();

    let err = Dataset::load(&files.config).unwrap_err();
    assert!(matches!(err.root(), DashboardError::MissingColumn { .. }));
}

#[test]
fn test_malformed_geojson_is_fatal() {
    let files = DatasetFiles::sample();
    std::fs::write(&files.config.geometry, "{ not json").unwrap();

    assert!(Dataset::load(&files.config).is_err());
}
