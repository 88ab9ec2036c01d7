use crate::config::DashboardConfig;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{Listing, ListingDataset};

use super::charts::{
    histogram, map_points, neighbourhood_counts, scatter_points, CategoryCount, Histogram,
    MapPoint, ScatterPoint,
};
use super::summary::{group_stats, GroupStats, Summary};

/// Everything the page shows for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Indices into the dataset of the listings passing the filters.
    pub visible_indices: Vec<usize>,
    pub summary: Summary,
    /// The first `table_rows` visible listings.
    pub table: Vec<Listing>,
    pub group_stats: Vec<GroupStats>,
    pub histogram: Histogram,
    pub neighbourhood_counts: Vec<CategoryCount>,
    pub scatter: Vec<ScatterPoint>,
    /// `None` when the map is disabled or the dataset has no coordinates.
    pub map: Option<Vec<MapPoint>>,
}

impl DashboardView {
    /// Run the whole pipeline: filter, summarise, compute chart data.
    pub fn build(dataset: &ListingDataset, filters: &FilterState, config: &DashboardConfig) -> Self {
        let visible_indices = filtered_indices(dataset, &filters.predicates());
        let visible: Vec<&Listing> = visible_indices
            .iter()
            .map(|&i| &dataset.listings[i])
            .collect();
        let prices: Vec<f64> = visible.iter().map(|l| l.price).collect();

        let map = (config.show_map && dataset.has_coordinates)
            .then(|| map_points(visible.iter().copied()));

        Self {
            summary: Summary::from_listings(visible.iter().copied()),
            table: visible
                .iter()
                .take(config.table_rows)
                .map(|&l| l.clone())
                .collect(),
            group_stats: group_stats(visible.iter().copied()),
            histogram: histogram(&prices, &config.histogram),
            neighbourhood_counts: neighbourhood_counts(
                visible.iter().copied(),
                config.neighbourhood_order,
                &dataset.neighbourhood_groups,
            ),
            scatter: scatter_points(visible.iter().copied(), config.scatter.max_reviews),
            map,
            visible_indices,
        }
    }

    /// Iterate over the visible listings of `dataset`.
    pub fn visible<'a>(&'a self, dataset: &'a ListingDataset) -> impl Iterator<Item = &'a Listing> {
        self.visible_indices.iter().map(|&i| &dataset.listings[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::init_filter_state;
    use crate::data::synthetic::{generate_dataset, SyntheticConfig};

    #[test]
    fn empty_selection_renders_empty_artifacts() {
        let config = DashboardConfig::synthetic();
        let ds = generate_dataset(&config.synthetic);
        let mut filters = init_filter_state(&ds, config.default_price_range);
        filters.neighbourhood_groups.clear();

        let view = DashboardView::build(&ds, &filters, &config);
        assert!(view.visible_indices.is_empty());
        assert_eq!(view.summary.count, 0);
        assert_eq!(view.summary.median_price, None);
        assert!(view.table.is_empty());
        assert!(view.group_stats.is_empty());
        assert_eq!(view.histogram.total(), 0);
        assert_eq!(view.histogram.counts.len(), 30);
        assert!(view.neighbourhood_counts.is_empty());
        assert!(view.scatter.is_empty());
        assert_eq!(view.map, Some(Vec::new()));
    }

    #[test]
    fn map_needs_coordinates_and_config() {
        let mut config = DashboardConfig::synthetic();
        config.synthetic.rows = 40;
        config.synthetic.coordinates = false;
        let ds = generate_dataset(&config.synthetic);
        let filters = init_filter_state(&ds, None);
        assert_eq!(DashboardView::build(&ds, &filters, &config).map, None);

        config.synthetic.coordinates = true;
        config.show_map = false;
        let ds = generate_dataset(&config.synthetic);
        assert_eq!(DashboardView::build(&ds, &filters, &config).map, None);
    }

    #[test]
    fn table_is_capped_and_counts_agree() {
        let config = DashboardConfig::synthetic();
        let ds = generate_dataset(&config.synthetic);
        let filters = init_filter_state(&ds, None);
        let view = DashboardView::build(&ds, &filters, &config);

        assert!(view.summary.count > config.table_rows);
        assert_eq!(view.table.len(), config.table_rows);
        assert_eq!(view.summary.count, view.visible(&ds).count());
        assert_eq!(view.histogram.total(), view.summary.count);
        let counted: usize = view.neighbourhood_counts.iter().map(|c| c.count).sum();
        assert_eq!(counted, view.summary.count);
    }
}
