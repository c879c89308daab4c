use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::growth::growtherror::GrowthError;

/// Anthropometric quantity a reference table describes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrowthMetric {
    Weight,
    Height,
    HeadCircumference
}

impl GrowthMetric {
    pub const ALL: [GrowthMetric; 3] = [
        GrowthMetric::Weight,
        GrowthMetric::Height,
        GrowthMetric::HeadCircumference
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GrowthMetric::Weight => "weight",
            GrowthMetric::Height => "height",
            GrowthMetric::HeadCircumference => "headCircumference"
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GrowthMetric::Weight => "kg",
            GrowthMetric::Height | GrowthMetric::HeadCircumference => "cm"
        }
    }
}

impl fmt::Display for GrowthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GrowthMetric {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrowthMetric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| GrowthError::UnknownMetric(s.to_owned()))
    }
}
