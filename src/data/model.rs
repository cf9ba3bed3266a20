use std::fmt;

// ---------------------------------------------------------------------------
// Label – did the session end in a purchase?
// ---------------------------------------------------------------------------

/// Binary purchase label. Encodes as `1` (revenue) or `0` (no revenue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    /// Decode the `Revenue` column. Only the exact token `TRUE` is positive.
    pub fn from_token(token: &str) -> Self {
        if token == "TRUE" {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Numeric code: 1 for a purchase, 0 otherwise.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_purchase(self) -> bool {
        self == Label::Positive
    }
}

impl From<bool> for Label {
    fn from(purchased: bool) -> Self {
        if purchased {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<Label> for bool {
    fn from(label: Label) -> Self {
        label.is_purchase()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "positive"),
            Label::Negative => write!(f, "negative"),
        }
    }
}

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Month tokens as they appear in the dataset, in calendar order.
/// June is spelled out in full; every other month is abbreviated.
pub const MONTH_TOKENS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Zero-based month index (January = 0 … December = 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month(u8);

impl Month {
    /// Look a token up in [`MONTH_TOKENS`]. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        MONTH_TOKENS
            .iter()
            .position(|t| *t == token)
            .map(|idx| Month(idx as u8))
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Returning visitors are encoded as 1, everyone else (new, other) as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorType {
    Returning,
    Other,
}

impl VisitorType {
    pub fn from_token(token: &str) -> Self {
        if token == "Returning_Visitor" {
            VisitorType::Returning
        } else {
            VisitorType::Other
        }
    }

    pub fn code(self) -> u8 {
        match self {
            VisitorType::Returning => 1,
            VisitorType::Other => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Session – one typed row of the source CSV
// ---------------------------------------------------------------------------

/// Number of feature columns (everything except the trailing `Revenue`).
pub const FEATURE_COUNT: usize = 17;

/// Number of columns in a raw record: the features plus the label.
pub const RECORD_WIDTH: usize = FEATURE_COUNT + 1;

/// Column names in record order, used in error messages.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Administrative",
    "Administrative_Duration",
    "Informational",
    "Informational_Duration",
    "ProductRelated",
    "ProductRelated_Duration",
    "BounceRates",
    "ExitRates",
    "PageValues",
    "SpecialDay",
    "Month",
    "OperatingSystems",
    "Browser",
    "Region",
    "TrafficType",
    "VisitorType",
    "Weekend",
];

/// Fixed-width numeric representation fed to the classifier.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// A browsing session with every column parsed to its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub administrative: i64,
    pub administrative_duration: f64,
    pub informational: i64,
    pub informational_duration: f64,
    pub product_related: i64,
    pub product_related_duration: f64,
    pub bounce_rates: f64,
    pub exit_rates: f64,
    pub page_values: f64,
    pub special_day: f64,
    pub month: Month,
    pub operating_systems: i64,
    pub browser: i64,
    pub region: i64,
    pub traffic_type: i64,
    pub visitor_type: VisitorType,
    pub weekend: bool,
}

impl Session {
    /// Flatten into the numeric vector, preserving column order.
    pub fn to_features(&self) -> FeatureVector {
        [
            self.administrative as f64,
            self.administrative_duration,
            self.informational as f64,
            self.informational_duration,
            self.product_related as f64,
            self.product_related_duration,
            self.bounce_rates,
            self.exit_rates,
            self.page_values,
            self.special_day,
            f64::from(self.month.index()),
            self.operating_systems as f64,
            self.browser as f64,
            self.region as f64,
            self.traffic_type as f64,
            f64::from(self.visitor_type.code()),
            if self.weekend { 1.0 } else { 0.0 },
        ]
    }
}

// ---------------------------------------------------------------------------
// Dataset – parallel features / labels
// ---------------------------------------------------------------------------

/// Feature vectors and labels, index-aligned. The two vectors only grow
/// together, so their lengths are always equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    features: Vec<FeatureVector>,
    labels: Vec<Label>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            features: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, features: FeatureVector, label: Label) {
        self.features.push(features);
        self.labels.push(label);
    }

    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Copy the given rows, in the given order, into a new dataset.
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        let mut out = Dataset::with_capacity(indices.len());
        for &i in indices {
            out.push(self.features[i], self.labels[i]);
        }
        out
    }

    /// Count of (positive, negative) labels.
    pub fn class_counts(&self) -> (usize, usize) {
        let positive = self.labels.iter().filter(|l| l.is_purchase()).count();
        (positive, self.labels.len() - positive)
    }
}
