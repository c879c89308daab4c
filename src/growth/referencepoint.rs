use serde::{
    Deserialize,
    Serialize
};

use crate::growth::lms::{
    calculate_z_score,
    inverse_lms
};

/// One knot of a reference curve: Box-Cox power `l`, median `m` and
/// coefficient of variation `s` at `age_months`.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ReferencePoint {
    #[serde(rename = "ageMonths")]
    pub age_months: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "S")]
    pub s: f64
}

impl ReferencePoint {
    pub const fn new(age_months: f64, l: f64, m: f64, s: f64) -> ReferencePoint {
        ReferencePoint { age_months, l, m, s }
    }

    pub fn z_score(&self, value: f64) -> f64 {
        calculate_z_score(value, self.l, self.m, self.s)
    }

    pub fn value_at(&self, z: f64) -> f64 {
        inverse_lms(self.l, self.m, self.s, z)
    }

    /// Linear interpolation of L, M and S between `self` and `upper` at
    /// `age_months`.
    pub fn lerp(&self, upper: &ReferencePoint, age_months: f64) -> ReferencePoint {
        let ratio = (age_months - self.age_months) / (upper.age_months - self.age_months);
        ReferencePoint {
            age_months,
            l: self.l + (upper.l - self.l) * ratio,
            m: self.m + (upper.m - self.m) * ratio,
            s: self.s + (upper.s - self.s) * ratio
        }
    }
}
