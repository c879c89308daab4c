use serde::Serialize;

use crate::growth::referencepoint::ReferencePoint;
use crate::math::round::round;

/// Z-scores used for the 3rd, 15th, 50th, 85th and 97th percentile bands.
pub const Z3: f64 = -1.88;
pub const Z15: f64 = -1.04;
pub const Z50: f64 = 0.0;
pub const Z85: f64 = 1.04;
pub const Z97: f64 = 1.88;

/// Reference band values at one age, each rounded to one decimal place.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub age_months: f64,
    pub p3: f64,
    pub p15: f64,
    pub p50: f64,
    pub p85: f64,
    pub p97: f64
}

impl CurvePoint {
    pub fn from_lms(age_months: f64, lms: &ReferencePoint) -> CurvePoint {
        let band = |z: f64| round(lms.value_at(z), 1);
        CurvePoint {
            age_months,
            p3: band(Z3),
            p15: band(Z15),
            p50: band(Z50),
            p85: band(Z85),
            p97: band(Z97)
        }
    }

    pub fn bands(&self) -> [f64; 5] {
        [self.p3, self.p15, self.p50, self.p85, self.p97]
    }
}


#[cfg(test)]
mod tests {
    use crate::growth::referencepoint::ReferencePoint;

    use super::CurvePoint;

    #[test]
    fn median_band_is_m() {
        let lms = ReferencePoint::new(0.0, 1.0, 49.8842, 0.03795);
        let point = CurvePoint::from_lms(0.0, &lms);
        assert_eq!(point.p50, 49.9);
        // L = 1: X = M·(1 + S·Z)
        assert_eq!(point.p97, 53.4);
        assert_eq!(point.p3, 46.3);
    }

    #[test]
    fn json_shape() {
        let lms = ReferencePoint::new(12.0, 0.0644, 9.6479, 0.10925);
        let value = serde_json::to_value(CurvePoint::from_lms(12.0, &lms)).unwrap();
        assert_eq!(value["ageMonths"], 12.0);
        assert_eq!(value["p50"], 9.6);
    }
}
