use thiserror::Error;

use crate::growth::growthmetric::GrowthMetric;
use crate::growth::sex::ReferenceSex;

#[derive(Debug, Error)]
pub enum GrowthError {
    #[error("age {age_months} months is outside the supported range [0, 60]")]
    AgeOutOfRange { age_months: f64 },

    #[error("measurement {value} must be a positive finite number")]
    NonPositiveMeasurement { value: f64 },

    #[error("unknown growth metric '{0}'")]
    UnknownMetric(String),

    #[error("reference table has no points")]
    EmptyTable,

    #[error("reference table ages must be strictly ascending (point {index} at {age_months} months)")]
    UnsortedTable { index: usize, age_months: f64 },

    #[error("coefficient of variation must be positive (S = {s} at {age_months} months)")]
    NonPositiveCoefficientOfVariation { age_months: f64, s: f64 },

    #[error("no reference table registered for {metric} / {sex}")]
    TableNotFound { metric: GrowthMetric, sex: ReferenceSex },

    #[error("curve step must be at least one month")]
    ZeroCurveStep,

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
}
