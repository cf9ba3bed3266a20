/// Data layer: core types, encoding, loading, and splitting.
///
/// Architecture:
/// ```text
///   shopping.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read rows, skip header
///   └──────────┘
///        │  one StringRecord per row
///        ▼
///   ┌──────────┐
///   │  encoder  │  row → (FeatureVector, Label)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  parallel Vec<FeatureVector>, Vec<Label>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  split    │  shuffled indices → train / test
///   └──────────┘
/// ```

pub mod encoder;
pub mod loader;
pub mod model;
pub mod split;
