use std::path::Path;

use anyhow::Result;

use listing_dashboard::config::DashboardConfig;
use listing_dashboard::data::filter::{init_filter_state, FilterState};
use listing_dashboard::data::model::ListingDataset;
use listing_dashboard::data::provider::{DatasetProvider, LoadOutcome};
use listing_dashboard::data::writer::write_csv;
use listing_dashboard::report::DashboardView;

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Owns the dataset; loaded once on construction.
    provider: DatasetProvider,

    /// Current sidebar selections.
    pub filters: FilterState,

    /// Everything derived from `filters` (recomputed on change).
    pub view: DashboardView,

    /// Colours per neighbourhood group.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let provider = DatasetProvider::new(config.source.clone(), config.synthetic.clone());
        let dataset = &provider.get().dataset;

        let filters = init_filter_state(dataset, config.default_price_range);
        let view = DashboardView::build(dataset, &filters, &config);
        let color_map = ColorMap::new(&dataset.neighbourhood_groups);

        Self {
            config,
            provider,
            filters,
            view,
            color_map,
            status_message: None,
        }
    }

    pub fn outcome(&self) -> &LoadOutcome {
        self.provider.get()
    }

    pub fn dataset(&self) -> &ListingDataset {
        &self.provider.get().dataset
    }

    /// Recompute the view after a filter change.
    pub fn refilter(&mut self) {
        let dataset = &self.provider.get().dataset;
        self.view = DashboardView::build(dataset, &self.filters, &self.config);
        log::debug!(
            "Refiltered: {} of {} listings visible",
            self.view.visible_indices.len(),
            dataset.len()
        );
    }

    /// Toggle a single neighbourhood group.
    pub fn toggle_group(&mut self, group: &str) {
        if !self.filters.neighbourhood_groups.remove(group) {
            self.filters.neighbourhood_groups.insert(group.to_string());
        }
        self.refilter();
    }

    /// Select all neighbourhood groups.
    pub fn select_all_groups(&mut self) {
        self.filters.neighbourhood_groups =
            self.dataset().neighbourhood_groups.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect all neighbourhood groups.
    pub fn select_no_groups(&mut self) {
        self.filters.neighbourhood_groups.clear();
        self.refilter();
    }

    pub fn set_room_type(&mut self, room_type: String) {
        self.filters.room_type = Some(room_type);
        self.refilter();
    }

    /// Write every visible listing (not just the table rows) as CSV.
    pub fn export_visible(&self, path: &Path) -> Result<usize> {
        write_csv(path, self.view.visible(self.dataset()))
    }
}
