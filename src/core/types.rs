use serde::Serialize;

/// One row of a telomere-length table: the raw end label and its TL-75
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMeasurementRow {
    /// End label, possibly several ends joined by commas
    pub end_field: String,

    /// TL-75 value for the row
    pub value: f64,
}

impl RawMeasurementRow {
    pub fn new(end_field: impl Into<String>, value: f64) -> Self {
        Self {
            end_field: end_field.into(),
            value,
        }
    }
}

/// Summary statistics, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Count,
    Min,
    Max,
    Median,
    Mean,
    #[serde(rename = "Stdev_Sample")]
    StdevSample,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Count,
        Metric::Min,
        Metric::Max,
        Metric::Median,
        Metric::Mean,
        Metric::StdevSample,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Count => "Count",
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Median => "Median",
            Self::Mean => "Mean",
            Self::StdevSample => "Stdev_Sample",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single reported statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    /// The partition was empty
    NotApplicable,
    Count(usize),
    Integer(i64),
    /// May be NaN, e.g. the sample deviation of a single value
    Float(f64),
}

impl StatValue {
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotApplicable => write!(f, "N/A"),
            Self::Count(n) => write!(f, "{n}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => write!(f, "NaN"),
            // Integral floats keep a decimal so they read as floats
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
