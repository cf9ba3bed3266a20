//! Nearest-neighbour purchase classifier.
//!
//! Features are compared on their raw scale. Durations in seconds dominate
//! the distance; that is accepted rather than corrected here.

use log::debug;
use thiserror::Error;

use crate::data::model::{Dataset, FeatureVector, Label};

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    #[error("{features} feature vectors but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },
}

/// A fitted model that assigns a label to a feature vector.
pub trait Classifier {
    fn predict_one(&self, features: &FeatureVector) -> Label;

    /// Predict every row, keeping input order.
    fn predict(&self, rows: &[FeatureVector]) -> Vec<Label> {
        rows.iter().map(|fv| self.predict_one(fv)).collect()
    }
}

/// 1-nearest-neighbour: a query takes the label of the closest training row
/// under Euclidean distance. Equidistant rows resolve to the earliest one.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    features: Vec<FeatureVector>,
    labels: Vec<Label>,
}

impl NearestNeighbor {
    pub fn fit(features: &[FeatureVector], labels: &[Label]) -> Result<Self, FitError> {
        if features.len() != labels.len() {
            return Err(FitError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        if features.is_empty() {
            return Err(FitError::EmptyTrainingSet);
        }
        debug!("fitted 1-NN on {} rows", features.len());
        Ok(Self {
            features: features.to_vec(),
            labels: labels.to_vec(),
        })
    }

    pub fn fit_dataset(train: &Dataset) -> Result<Self, FitError> {
        Self::fit(train.features(), train.labels())
    }

    /// Index of the training row closest to `query`.
    fn nearest(&self, query: &FeatureVector) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, row) in self.features.iter().enumerate() {
            let dist = squared_distance(row, query);
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}

impl Classifier for NearestNeighbor {
    fn predict_one(&self, features: &FeatureVector) -> Label {
        self.labels[self.nearest(features)]
    }
}

// Same ordering as Euclidean distance, without the sqrt.
fn squared_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FEATURE_COUNT;

    fn point(values: &[f64]) -> FeatureVector {
        let mut fv = [0.0; FEATURE_COUNT];
        fv[..values.len()].copy_from_slice(values);
        fv
    }

    #[test]
    fn predicts_label_of_closest_row() {
        let model = NearestNeighbor::fit(
            &[point(&[0.0, 0.0]), point(&[10.0, 10.0])],
            &[Label::Negative, Label::Positive],
        )
        .unwrap();
        assert_eq!(model.predict_one(&point(&[1.0, 2.0])), Label::Negative);
        assert_eq!(model.predict_one(&point(&[9.0, 7.5])), Label::Positive);
        assert_eq!(
            model.predict(&[point(&[11.0, 11.0]), point(&[-3.0, 0.0])]),
            vec![Label::Positive, Label::Negative]
        );
    }

    #[test]
    fn training_rows_predict_themselves() {
        let rows = [point(&[1.0]), point(&[2.0]), point(&[3.0]), point(&[4.0])];
        let labels = [Label::Positive, Label::Negative, Label::Negative, Label::Positive];
        let model = NearestNeighbor::fit(&rows, &labels).unwrap();
        assert_eq!(model.predict(&rows), labels.to_vec());
    }

    #[test]
    fn ties_go_to_earliest_row() {
        let model = NearestNeighbor::fit(
            &[point(&[-1.0]), point(&[1.0])],
            &[Label::Positive, Label::Negative],
        )
        .unwrap();
        assert_eq!(model.predict_one(&point(&[0.0])), Label::Positive);
    }

    #[test]
    fn unscaled_features_dominate_distance() {
        // Column 5 (product page seconds) outweighs a mismatch in column 0.
        let model = NearestNeighbor::fit(
            &[
                point(&[0.0, 0.0, 0.0, 0.0, 0.0, 1000.0]),
                point(&[5.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ],
            &[Label::Positive, Label::Negative],
        )
        .unwrap();
        assert_eq!(
            model.predict_one(&point(&[0.0, 0.0, 0.0, 0.0, 0.0, 10.0])),
            Label::Negative
        );
    }

    #[test]
    fn fit_rejects_bad_input() {
        assert_eq!(
            NearestNeighbor::fit(&[], &[]).unwrap_err(),
            FitError::EmptyTrainingSet
        );
        assert_eq!(
            NearestNeighbor::fit(&[point(&[1.0])], &[]).unwrap_err(),
            FitError::LengthMismatch {
                features: 1,
                labels: 0
            }
        );
    }
}
