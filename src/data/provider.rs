use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use super::loader::load_file;
use super::model::ListingDataset;
use super::synthetic::{generate_dataset, SyntheticConfig};
use crate::config::SourceConfig;

// ---------------------------------------------------------------------------
// Load outcome
// ---------------------------------------------------------------------------

/// Where the dataset actually came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Generated directly, no file was requested.
    Synthetic { seed: u64 },
    /// Loaded from the requested file.
    File { path: PathBuf },
    /// The requested file was unusable; synthetic data was generated instead.
    Fallback { path: PathBuf, reason: String },
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataSource::Fallback { .. })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Synthetic { seed } => write!(f, "synthetic (seed {seed})"),
            DataSource::File { path } => write!(f, "{}", path.display()),
            DataSource::Fallback { path, .. } => {
                write!(f, "synthetic fallback for {}", path.display())
            }
        }
    }
}

/// A non-empty dataset plus its provenance.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: ListingDataset,
    pub source: DataSource,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Owns the dataset for the life of the process.
///
/// Nothing is loaded until the first [`DatasetProvider::get`]; every later
/// call returns the same value.
pub struct DatasetProvider {
    source: SourceConfig,
    synthetic: SyntheticConfig,
    cell: OnceLock<LoadOutcome>,
}

impl DatasetProvider {
    pub fn new(source: SourceConfig, synthetic: SyntheticConfig) -> Self {
        Self {
            source,
            synthetic,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &LoadOutcome {
        self.cell.get_or_init(|| self.load())
    }

    fn load(&self) -> LoadOutcome {
        let outcome = match &self.source {
            SourceConfig::Synthetic => LoadOutcome {
                dataset: generate_dataset(&self.synthetic),
                source: DataSource::Synthetic {
                    seed: self.synthetic.seed,
                },
            },
            SourceConfig::File { path } => match load_file(path) {
                Ok(listings) => LoadOutcome {
                    dataset: ListingDataset::from_listings(listings),
                    source: DataSource::File { path: path.clone() },
                },
                Err(e) => {
                    log::warn!(
                        "Could not load {}: {e}; using synthetic data (seed {})",
                        path.display(),
                        self.synthetic.seed
                    );
                    LoadOutcome {
                        dataset: generate_dataset(&self.synthetic),
                        source: DataSource::Fallback {
                            path: path.clone(),
                            reason: e.to_string(),
                        },
                    }
                }
            },
        };

        log::info!(
            "Loaded {} listings from {} with groups {:?}",
            outcome.dataset.len(),
            outcome.source,
            outcome.dataset.neighbourhood_groups
        );
        outcome
    }
}
