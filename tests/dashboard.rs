use std::collections::BTreeSet;
use std::path::PathBuf;

use listing_dashboard::config::{DashboardConfig, SourceConfig, SAMPLE_DATA_PATH};
use listing_dashboard::data::filter::{filtered_indices, init_filter_state, FilterState};
use listing_dashboard::data::provider::{DataSource, DatasetProvider};
use listing_dashboard::report::summary::{format_price, PLACEHOLDER};
use listing_dashboard::report::DashboardView;

fn synthetic_provider() -> DatasetProvider {
    let config = DashboardConfig::synthetic();
    DatasetProvider::new(config.source, config.synthetic)
}

#[test]
fn manhattan_entire_homes_between_50_and_300() {
    let config = DashboardConfig::synthetic();
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;

    let filters = FilterState {
        price_range: (50.0, 300.0),
        neighbourhood_groups: BTreeSet::from(["Manhattan".to_string()]),
        room_type: Some("Entire home/apt".to_string()),
    };
    let view = DashboardView::build(dataset, &filters, &config);

    assert!(view.summary.count > 0);
    for listing in view.visible(dataset) {
        assert!((50.0..=300.0).contains(&listing.price));
        assert_eq!(listing.neighbourhood_group, "Manhattan");
        assert_eq!(listing.room_type, "Entire home/apt");
    }
    assert_eq!(view.group_stats.len(), 1);
    assert_eq!(view.group_stats[0].count, view.summary.count);
}

#[test]
fn view_is_a_subset_satisfying_every_predicate() {
    let config = DashboardConfig::synthetic();
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;

    for room in &dataset.room_types {
        for skip in &dataset.neighbourhood_groups {
            let mut filters = init_filter_state(dataset, Some([120.0, 420.0]));
            filters.room_type = Some(room.clone());
            filters.neighbourhood_groups.remove(skip);

            let view = DashboardView::build(dataset, &filters, &config);
            let predicates = filters.predicates();

            let mut previous = None;
            for &i in &view.visible_indices {
                assert!(i < dataset.len());
                assert!(previous.map_or(true, |p| p < i));
                previous = Some(i);
                assert!(predicates.iter().all(|p| p.matches(&dataset.listings[i])));
            }

            // Nothing matching was left out.
            let expected = dataset
                .listings
                .iter()
                .filter(|l| predicates.iter().all(|p| p.matches(l)))
                .count();
            assert_eq!(view.summary.count, expected);
        }
    }
}

#[test]
fn reversed_predicates_give_the_same_view() {
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;
    let filters = init_filter_state(dataset, Some([50.0, 300.0]));

    let forward = filters.predicates();
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(
        filtered_indices(dataset, &forward),
        filtered_indices(dataset, &reversed)
    );
}

#[test]
fn empty_group_selection_renders_placeholders() {
    let config = DashboardConfig::synthetic();
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;

    let mut filters = init_filter_state(dataset, config.default_price_range);
    filters.neighbourhood_groups.clear();
    let view = DashboardView::build(dataset, &filters, &config);

    assert_eq!(view.summary.count, 0);
    assert_eq!(format_price(view.summary.mean_price), PLACEHOLDER);
    assert_eq!(format_price(view.summary.median_price), PLACEHOLDER);
    assert!(view.table.is_empty());
    assert!(view.group_stats.is_empty());
    assert!(view.scatter.is_empty());
}

#[test]
fn summary_count_matches_chart_rows() {
    let config = DashboardConfig::synthetic();
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;
    let filters = init_filter_state(dataset, config.default_price_range);
    let view = DashboardView::build(dataset, &filters, &config);

    assert_eq!(view.summary.count, view.visible_indices.len());
    assert_eq!(
        view.map.as_ref().map(Vec::len),
        Some(view.summary.count),
        "synthetic listings all carry coordinates"
    );
    // Synthetic reviews are always below the outlier threshold.
    assert_eq!(view.scatter.len(), view.summary.count);
}

#[test]
fn group_table_has_one_row_per_present_group() {
    let config = DashboardConfig::synthetic();
    let provider = synthetic_provider();
    let dataset = &provider.get().dataset;
    let mut filters = init_filter_state(dataset, None);
    filters.neighbourhood_groups.remove("Bronx");
    let view = DashboardView::build(dataset, &filters, &config);

    let present: BTreeSet<&str> = view
        .visible(dataset)
        .map(|l| l.neighbourhood_group.as_str())
        .collect();
    let rows: Vec<&str> = view
        .group_stats
        .iter()
        .map(|g| g.neighbourhood_group.as_str())
        .collect();

    assert_eq!(rows, present.into_iter().collect::<Vec<_>>());
    assert!(!rows.contains(&"Bronx"));
    let total: usize = view.group_stats.iter().map(|g| g.count).sum();
    assert_eq!(total, view.summary.count);
}

#[test]
fn synthetic_dataset_is_reproducible() {
    let a = synthetic_provider();
    let b = synthetic_provider();
    assert_eq!(a.get().dataset.listings, b.get().dataset.listings);
}

#[test]
fn bundled_sample_loads_without_fallback() {
    let config = DashboardConfig::sample();
    let provider = DatasetProvider::new(config.source.clone(), config.synthetic.clone());
    let outcome = provider.get();

    assert_eq!(outcome.source, DataSource::File {
            path: PathBuf::from(SAMPLE_DATA_PATH)
        });
    assert!(outcome.dataset.has_coordinates);

    let filters = init_filter_state(&outcome.dataset, config.default_price_range);
    assert_eq!(Some(filters.price_range), outcome.dataset.price_bounds);

    let view = DashboardView::build(&outcome.dataset, &filters, &config);
    assert_eq!(view.histogram.counts.len(), 50);
    assert_eq!(view.histogram.total(), view.summary.count);
    let map = view.map.expect("sample has coordinates");
    assert!(map.len() <= view.summary.count);
}

#[test]
fn sample_variant_falls_back_when_file_is_missing() {
    let mut config = DashboardConfig::sample();
    config.source = SourceConfig::File {
        path: PathBuf::from("does/not/exist.csv"),
    };
    let provider = DatasetProvider::new(config.source, config.synthetic);

    let outcome = provider.get();
    assert!(outcome.source.is_fallback());
    assert_eq!(outcome.dataset.len(), 1000);
}
