use serde::Serialize;

use crate::growth::interpretation::Interpretation;

/// Outcome of a single point query. `percentile` has one decimal place,
/// `z_score` two; `value` is the measurement as given.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentileResult {
    pub value: f64,
    pub percentile: f64,
    pub z_score: f64,
    pub interpretation: Interpretation,
    pub interpretation_text: String
}
