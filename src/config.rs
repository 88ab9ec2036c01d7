use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::synthetic::SyntheticConfig;

/// Bundled sample listings shipped with the repository. Absolute, so the
/// `sample` variant finds it from any working directory.
pub const SAMPLE_DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_listings.csv");

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Where listings come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Synthetic,
    /// A listings file; falls back to synthetic data if unusable.
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    pub bins: usize,
    /// Fixed `[low, high]`; `None` derives the range from the filtered prices.
    pub range: Option<[f64; 2]>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: 30,
            range: Some([0.0, 500.0]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Largest count first, ties by name.
    Descending,
    /// Dataset first-appearance order.
    Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Points with at least this many reviews are dropped as outliers.
    pub max_reviews: Option<u32>,
    pub color_by_group: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            max_reviews: Some(200),
            color_by_group: false,
        }
    }
}

/// Everything that differs between dashboard variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub description: String,
    pub source: SourceConfig,
    pub synthetic: SyntheticConfig,
    pub default_price_range: Option<[f64; 2]>,
    pub table_rows: usize,
    pub histogram: HistogramConfig,
    pub neighbourhood_order: CategoryOrder,
    pub scatter: ScatterConfig,
    pub show_map: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::synthetic()
    }
}

impl DashboardConfig {
    /// Demo dataset with coordinates and a fixed 0..500 price histogram.
    pub fn synthetic() -> Self {
        Self {
            title: "Airbnb Analytics Dashboard".to_string(),
            description: "Interactive panel for rental listing analysis. \
                          Use the sidebar filters to narrow the data."
                .to_string(),
            source: SourceConfig::Synthetic,
            synthetic: SyntheticConfig::default(),
            default_price_range: Some([50.0, 300.0]),
            table_rows: 20,
            histogram: HistogramConfig::default(),
            neighbourhood_order: CategoryOrder::Descending,
            scatter: ScatterConfig::default(),
            show_map: true,
        }
    }

    /// Bundled sample file with synthetic fallback, data-derived histogram.
    pub fn sample() -> Self {
        Self {
            title: "Airbnb Listings Explorer".to_string(),
            description: "Sample New York listings. Falls back to generated \
                          data if the sample file cannot be read."
                .to_string(),
            source: SourceConfig::File {
                path: PathBuf::from(SAMPLE_DATA_PATH),
            },
            default_price_range: None,
            histogram: HistogramConfig {
                bins: 50,
                range: None,
            },
            neighbourhood_order: CategoryOrder::Category,
            scatter: ScatterConfig {
                max_reviews: None,
                color_by_group: true,
            },
            ..Self::synthetic()
        }
    }

    /// Read a JSON config file. Missing fields take the synthetic defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
