//! Sensitivity / specificity scoring of held-out predictions.

use serde::Serialize;
use thiserror::Error;

use crate::data::model::Label;

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("{actual} actual labels but {predicted} predictions")]
    LengthMismatch { actual: usize, predicted: usize },

    /// The test set holds no rows of one class, so its rate is undefined.
    #[error("test set contains no {missing} labels; rates are undefined")]
    DegenerateTestSet { missing: Label },
}

/// Confusion counts for binary purchase prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Purchases predicted as purchases.
    pub tp: usize,
    /// Purchases predicted as no purchase.
    pub fn_: usize,
    /// Non-purchases predicted as no purchase.
    pub tn: usize,
    /// Non-purchases predicted as purchases.
    pub fp: usize,
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Positive, Label::Positive) => self.tp += 1,
            (Label::Positive, Label::Negative) => self.fn_ += 1,
            (Label::Negative, Label::Negative) => self.tn += 1,
            (Label::Negative, Label::Positive) => self.fp += 1,
        }
    }

    pub fn from_labels(actual: &[Label], predicted: &[Label]) -> Result<Self, EvalError> {
        if actual.len() != predicted.len() {
            return Err(EvalError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        let mut cm = Self::new();
        for (&a, &p) in actual.iter().zip(predicted) {
            cm.record(a, p);
        }
        Ok(cm)
    }

    pub fn correct(&self) -> usize {
        self.tp + self.tn
    }

    pub fn incorrect(&self) -> usize {
        self.fn_ + self.fp
    }

    pub fn actual_positive(&self) -> usize {
        self.tp + self.fn_
    }

    pub fn actual_negative(&self) -> usize {
        self.tn + self.fp
    }

    /// True positive and true negative rates.
    pub fn rates(&self) -> Result<Rates, EvalError> {
        let positives = self.actual_positive();
        let negatives = self.actual_negative();
        if positives == 0 {
            return Err(EvalError::DegenerateTestSet {
                missing: Label::Positive,
            });
        }
        if negatives == 0 {
            return Err(EvalError::DegenerateTestSet {
                missing: Label::Negative,
            });
        }
        Ok(Rates {
            sensitivity: self.tp as f64 / positives as f64,
            specificity: self.tn as f64 / negatives as f64,
        })
    }
}

/// Class-conditional accuracy, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rates {
    /// Share of actual purchases predicted as purchases.
    pub sensitivity: f64,
    /// Share of actual non-purchases predicted as non-purchases.
    pub specificity: f64,
}

/// Compare predictions with the true labels of the same rows.
pub fn evaluate(actual: &[Label], predicted: &[Label]) -> Result<Rates, EvalError> {
    ConfusionMatrix::from_labels(actual, predicted)?.rates()
}
