/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  singapore_cleaned.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + validate header → ResaleDataset (memoized per path)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ResaleDataset  │  Vec<Transaction>, distinct-value indices
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range ∧ flat-type set → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  grouped means, OLS fit → chart-ready series
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
