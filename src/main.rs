mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use eframe::egui;

use app::ListingDashboardApp;
use listing_dashboard::config::{DashboardConfig, SourceConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Generated demo data with coordinates.
    Synthetic,
    /// Bundled sample file, generated data if it cannot be read.
    Sample,
}

/// Interactive rental listing dashboard.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Preset used when no config file is given.
    #[arg(long, value_enum, default_value_t = Variant::Synthetic)]
    variant: Variant,

    /// JSON dashboard config; replaces the preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listings file (.csv, .json, .parquet) overriding the configured source.
    #[arg(long)]
    data: Option<PathBuf>,
}

impl Args {
    fn dashboard_config(&self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)?,
            None => match self.variant {
                Variant::Synthetic => DashboardConfig::synthetic(),
                Variant::Sample => DashboardConfig::sample(),
            },
        };
        if let Some(path) = &self.data {
            config.source = SourceConfig::File { path: path.clone() };
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.dashboard_config()?;
    log::info!("Starting with source {:?}", config.source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ListingDashboardApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
