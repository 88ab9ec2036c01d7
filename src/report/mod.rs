/// Reporting layer: everything computed from a filtered view.
///
/// ```text
///   ListingDataset + FilterState
///              │
///              ▼
///   ┌─────────────────────┐
///   │ dashboard::build     │  filter once, then fan out
///   └─────────────────────┘
///        │            │
///        ▼            ▼
///   ┌─────────┐  ┌────────┐
///   │ summary  │  │ charts  │  metrics, group table / histogram, counts, scatter, map
///   └─────────┘  └────────┘
/// ```

pub mod charts;
pub mod dashboard;
pub mod summary;

pub use dashboard::DashboardView;
