use std::num::{ParseFloatError, ParseIntError};

use csv::StringRecord;
use thiserror::Error;

use super::model::{
    FeatureVector, Label, Month, Session, VisitorType, FEATURE_NAMES, RECORD_WIDTH,
};

/// Why a single record could not be encoded.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field}: '{value}' is not an integer")]
    Integer {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{field}: '{value}' is not a number")]
    Float {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field}: '{value}' is not a finite number")]
    NonFinite { field: &'static str, value: String },

    #[error("Month: unrecognised month token '{0}'")]
    UnknownMonth(String),
}

/// Encode one raw record into its feature vector and label.
pub fn encode(record: &StringRecord) -> Result<(FeatureVector, Label), ParseError> {
    let (session, label) = parse_session(record)?;
    Ok((session.to_features(), label))
}

/// Parse one raw record into a typed [`Session`] plus its `Revenue` label.
pub fn parse_session(record: &StringRecord) -> Result<(Session, Label), ParseError> {
    if record.len() != RECORD_WIDTH {
        return Err(ParseError::FieldCount {
            expected: RECORD_WIDTH,
            found: record.len(),
        });
    }
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let month_token = field(10);
    let month = Month::from_token(month_token)
        .ok_or_else(|| ParseError::UnknownMonth(month_token.to_string()))?;

    let session = Session {
        administrative: int(field(0), 0)?,
        administrative_duration: float(field(1), 1)?,
        informational: int(field(2), 2)?,
        informational_duration: float(field(3), 3)?,
        product_related: int(field(4), 4)?,
        product_related_duration: float(field(5), 5)?,
        bounce_rates: float(field(6), 6)?,
        exit_rates: float(field(7), 7)?,
        page_values: float(field(8), 8)?,
        special_day: float(field(9), 9)?,
        month,
        operating_systems: int(field(11), 11)?,
        browser: int(field(12), 12)?,
        region: int(field(13), 13)?,
        traffic_type: int(field(14), 14)?,
        visitor_type: VisitorType::from_token(field(15)),
        weekend: field(16) == "TRUE",
    };

    Ok((session, Label::from_token(field(17))))
}

fn int(raw: &str, col: usize) -> Result<i64, ParseError> {
    raw.trim().parse::<i64>().map_err(|source| ParseError::Integer {
        field: FEATURE_NAMES[col],
        value: raw.to_string(),
        source,
    })
}

// NaN and infinities parse as f64 but have no nearest neighbour.
fn float(raw: &str, col: usize) -> Result<f64, ParseError> {
    let value = raw.trim().parse::<f64>().map_err(|source| ParseError::Float {
        field: FEATURE_NAMES[col],
        value: raw.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            field: FEATURE_NAMES[col],
            value: raw.to_string(),
        });
    }
    Ok(value)
}
