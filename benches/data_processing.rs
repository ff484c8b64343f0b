//! Benchmarks for data processing operations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geo::{polygon, MultiPolygon};
use tfr_dashboard::analysis::{brush, Brush, ClassificationScheme};
use tfr_dashboard::charts::{build_choropleth, LinkedPanel, LINKED_PANEL_YEAR};
use tfr_dashboard::data::merge;
use tfr_dashboard::{Dataset, GeoRecord, IndicatorRecord, MapView};

const YEARS: [i32; 6] = [1970, 1980, 1990, 2000, 2010, 2020];

/// Synthetic world of `countries` squares with one row per country and year
fn synthetic_tables(countries: usize) -> (Vec<GeoRecord>, Vec<IndicatorRecord>) {
    let geometry = (0..countries)
        .map(|i| {
            let x = (i % 36) as f64 * 10.0 - 180.0;
            let y = (i / 36) as f64 * 10.0 - 90.0;
            let p = polygon![
                (x: x, y: y),
                (x: x + 8.0, y: y),
                (x: x + 8.0, y: y + 8.0),
                (x: x + 4.0, y: y + 4.0),
                (x: x, y: y + 8.0),
            ];
            GeoRecord::new(format!("Country {i}"), "Asia", MultiPolygon::new(vec![p]))
        })
        .collect();

    let indicators = (0..countries)
        .flat_map(|i| {
            YEARS.iter().map(move |&year| {
                let t = (year - 1970) as f64 / 50.0;
                IndicatorRecord {
                    tfr: Some(6.5 - 4.0 * t + (i % 7) as f64 * 0.2),
                    avg_gdp: Some(500.0 * (1.0 + i as f64) * (1.0 + t)),
                    population_density: Some(10.0 + i as f64),
                    life_expectancy: Some(55.0 + 20.0 * t),
                    ..IndicatorRecord::new(format!("Country {i}"), year)
                }
                .normalize()
            })
        })
        .collect();

    (geometry, indicators)
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    for size in [50, 200, 1000].iter() {
        let (geometry, indicators) = synthetic_tables(*size);
        group.throughput(Throughput::Elements(indicators.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("inner_join", size),
            &(geometry, indicators),
            |b, (geometry, indicators)| {
                b.iter(|| black_box(merge(geometry, indicators)));
            },
        );
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let values: Vec<Option<f64>> = (0..10_000)
        .map(|i| if i % 50 == 0 { None } else { Some((i % 900) as f64 / 100.0 - 0.5) })
        .collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    let schemes = [
        ("snapshot", ClassificationScheme::tfr_snapshot()),
        ("difference", ClassificationScheme::tfr_difference()),
        ("quantized", ClassificationScheme::tfr_quantized()),
    ];
    for (name, scheme) in schemes.iter() {
        group.bench_with_input(BenchmarkId::new("classify", name), &values, |b, values| {
            b.iter(|| {
                let classes: Vec<_> = values.iter().map(|v| scheme.classify(*v)).collect();
                black_box(classes)
            });
        });
    }

    let (geometry, indicators) = synthetic_tables(200);
    let dataset = Dataset::from_tables(geometry, indicators);
    group.bench_function("choropleth_2020", |b| {
        b.iter(|| black_box(build_choropleth(&dataset, MapView::Year2020)));
    });

    group.finish();
}

fn bench_brush_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush_filter");

    let points: Vec<[f64; 2]> = (0..10_000)
        .map(|i| [5.0 + (i % 700) as f64 / 100.0, 0.5 + (i % 650) as f64 / 100.0])
        .collect();
    let selection = Brush::from_corners([7.0, 1.0], [10.0, 3.0]);
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("select_rows", |b| {
        b.iter(|| {
            let selected = brush::select(&points, Some(&selection), |p| (Some(p[0]), Some(p[1])));
            black_box(selected.len())
        });
    });

    let (geometry, indicators) = synthetic_tables(1000);
    let dataset = Dataset::from_tables(geometry, indicators);
    let panel = LinkedPanel::build(&dataset, LINKED_PANEL_YEAR);
    group.bench_function("secondary_views", |b| {
        b.iter(|| black_box(panel.secondary(Some(&selection))));
    });

    group.finish();
}

criterion_group!(benches, bench_join, bench_classification, bench_brush_filter);

criterion_main!(benches);
