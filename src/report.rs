use std::fmt;

use serde::Serialize;

use crate::evaluate::{ConfusionMatrix, Rates};

/// Outcome of one train / predict / evaluate run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub train_rows: usize,
    pub test_rows: usize,
    pub confusion: ConfusionMatrix,
    pub correct: usize,
    pub incorrect: usize,
    pub sensitivity: f64,
    pub specificity: f64,
}

impl Report {
    pub fn new(train_rows: usize, confusion: ConfusionMatrix, rates: Rates) -> Self {
        Self {
            train_rows,
            test_rows: confusion.correct() + confusion.incorrect(),
            correct: confusion.correct(),
            incorrect: confusion.incorrect(),
            sensitivity: rates.sensitivity,
            specificity: rates.specificity,
            confusion,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The four-line console summary.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {}", self.correct)?;
        writeln!(f, "Incorrect: {}", self.incorrect)?;
        writeln!(f, "True Positive Rate: {:.2}%", 100.0 * self.sensitivity)?;
        writeln!(f, "True Negative Rate: {:.2}%", 100.0 * self.specificity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let confusion = ConfusionMatrix {
            tp: 2,
            fn_: 1,
            tn: 6,
            fp: 1,
        };
        let rates = confusion.rates().unwrap();
        Report::new(15, confusion, rates)
    }

    #[test]
    fn prints_four_lines_with_two_decimals() {
        assert_eq!(
            sample().to_string(),
            "Correct: 8\nIncorrect: 2\nTrue Positive Rate: 66.67%\nTrue Negative Rate: 85.71%\n"
        );
    }

    #[test]
    fn counts_derive_from_confusion() {
        let report = sample();
        assert_eq!(report.test_rows, 10);
        assert_eq!(report.train_rows, 15);
        assert_eq!(report.correct + report.incorrect, report.test_rows);
    }

    #[test]
    fn json_carries_all_fields() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["correct"], 8);
        assert_eq!(json["incorrect"], 2);
        assert_eq!(json["confusion"]["tp"], 2);
        assert_eq!(json["confusion"]["fn_"], 1);
        assert_eq!(json["train_rows"], 15);
        assert_eq!(json["test_rows"], 10);
        assert!(json.get("test_size").is_none());
        assert!((json["specificity"].as_f64().unwrap() - 6.0 / 7.0).abs() < 1e-12);
    }
}
