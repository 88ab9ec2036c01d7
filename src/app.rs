use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use listing_dashboard::config::DashboardConfig;
use listing_dashboard::data::provider::DataSource;

use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ListingDashboardApp {
    pub state: AppState,
}

impl ListingDashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for ListingDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, tables, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| report(ui, &self.state));
        });
    }
}

fn report(ui: &mut Ui, state: &AppState) {
    let config = &state.config;
    let view = &state.view;

    ui.heading(&config.title);
    ui.label(&config.description);
    if let DataSource::Fallback { path, reason } = &state.outcome().source {
        ui.label(
            RichText::new(format!(
                "Could not load {} ({reason}); showing generated demo data.",
                path.display()
            ))
            .color(Color32::YELLOW),
        );
    }
    ui.separator();

    ui.strong("Overview");
    tables::metrics(ui, &view.summary);
    ui.separator();

    ui.strong(format!(
        "Filtered listings (first {} rows)",
        config.table_rows
    ));
    tables::listings_table(ui, &view.table, state.dataset().has_coordinates);
    ui.separator();

    ui.strong("Price distribution");
    plot::price_histogram(ui, &view.histogram);

    ui.strong("Listings per neighbourhood group");
    plot::neighbourhood_bars(ui, &view.neighbourhood_counts, &state.color_map);

    ui.strong("Price vs. number of reviews");
    plot::price_reviews_scatter(
        ui,
        &view.scatter,
        &state.color_map,
        config.scatter.color_by_group,
    );

    if config.show_map {
        ui.strong("Listing locations");
        match &view.map {
            Some(points) => plot::listing_map(ui, points, &state.color_map),
            None => {
                ui.label("This dataset has no coordinates.");
            }
        }
    }
    ui.separator();

    ui.strong("Summary by neighbourhood group");
    tables::group_table(ui, &view.group_stats);

    ui.separator();
    ui.label(RichText::new(format!("Data source: {}", state.outcome().source)).weak());
}
