//! Purchase-intent evaluation for e-commerce browsing sessions.
//!
//! Sessions are read from CSV, encoded as fixed-width numeric vectors,
//! split into train and test sets, and scored with a 1-nearest-neighbour
//! classifier by sensitivity and specificity.

pub mod classifier;
pub mod config;
pub mod data;
pub mod evaluate;
pub mod pipeline;
pub mod report;
