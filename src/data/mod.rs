/// Data layer: core types, loading, classification, and caching.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SampleSeries (sorted by timestamp)
///   └──────────┘
///        │                       ┌──────────┐
///        ▼                       │  cache    │  memoize by path + mtime
///   ┌──────────────┐            └──────────┘
///   │ SampleSeries │
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  threshold verdict → ClassificationSummary
///   └──────────┘
/// ```

pub mod cache;
pub mod classify;
pub mod loader;
pub mod model;
