/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv        seeded RNG
///        │                            │
///        ▼                            ▼
///   ┌──────────┐   fails/empty   ┌───────────┐
///   │  loader   │ ─────────────▶ │ synthetic  │
///   └──────────┘                 └───────────┘
///        │                            │
///        ▼                            ▼
///   ┌────────────────────────────────────┐
///   │ provider   OnceLock<LoadOutcome>     │  ListingDataset + DataSource
///   └────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  price / group / room predicates → filtered indices
///   └──────────┘
///
///   writer: listings → .parquet / .json / .csv (sample files, CSV export)
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod provider;
pub mod synthetic;
pub mod writer;
