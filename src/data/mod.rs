/// Data layer: core types, loading, statistics, and the grid adapter.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  DataTable  │  immutable snapshot: named columns × rows
///   └────────────┘
///     │         │
///     ▼         ▼
///   ┌───────┐ ┌─────────────┐
///   │ stats  │ │ table_model │  describe / corr      grid queries
///   └───────┘ └─────────────┘
/// ```
pub mod loader;
pub mod model;
pub mod stats;
pub mod table_model;
