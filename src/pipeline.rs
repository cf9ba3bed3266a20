//! Load → split → fit → predict → evaluate, wired together.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::classifier::{Classifier, NearestNeighbor};
use crate::config::PipelineConfig;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::data::split::{split, RandomSplit, Splitter};
use crate::evaluate::ConfusionMatrix;
use crate::report::Report;

/// Run the full evaluation on the CSV at `path`.
pub fn run(path: &Path, config: &PipelineConfig) -> Result<Report> {
    let dataset =
        load_file(path).with_context(|| format!("loading data from {}", path.display()))?;
    let mut splitter = RandomSplit::new(config.seed);
    evaluate_dataset(&dataset, &mut splitter, config.test_size)
}

/// Split an already loaded dataset, train on one part and score the other.
pub fn evaluate_dataset(
    dataset: &Dataset,
    splitter: &mut dyn Splitter,
    test_size: f64,
) -> Result<Report> {
    let parts = split(dataset, splitter, test_size).context("splitting train/test sets")?;
    info!(
        "training on {} sessions, testing on {}",
        parts.train.len(),
        parts.test.len()
    );

    let model = NearestNeighbor::fit_dataset(&parts.train).context("fitting classifier")?;
    let predictions = model.predict(parts.test.features());

    let confusion = ConfusionMatrix::from_labels(parts.test.labels(), &predictions)
        .context("scoring predictions")?;
    let rates = confusion.rates().context("scoring predictions")?;
    info!(
        "sensitivity {:.4}, specificity {:.4}",
        rates.sensitivity, rates.specificity
    );

    Ok(Report::new(parts.train.len(), confusion, rates))
}
