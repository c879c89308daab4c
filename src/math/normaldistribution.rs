use crate::math::round::round;

// ─────────────────────────────────────────────────────────────────────────────
// Standard normal CDF
// ─────────────────────────────────────────────────────────────────────────────
//
// Φ(z) = ½·(1 + erf(z/√2))
//
// erf uses the Abramowitz–Stegun 7.1.26 rational approximation (|ε| <= 1.5e-7):
//   t      = 1 / (1 + p·x)
//   erf(x) ≈ 1 - (a1·t + a2·t² + a3·t³ + a4·t⁴ + a5·t⁵)·e^(-x²)

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// erf for x >= 0.
fn erf_abs(x: f64) -> f64 {
    let t = 1.0 / (1.0 + P * x);
    1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp()
}

/// Cumulative probability of the standard normal distribution, in [0, 1].
pub fn normal_cdf(z: f64) -> f64 {
    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;
    0.5 * (1.0 + sign * erf_abs(x))
}

/// Converts a Z-score to a percentile on the 0–100 scale, rounded to one
/// decimal place.
pub fn z_score_to_percentile(z: f64) -> f64 {
    round(normal_cdf(z) * 100.0, 1)
}


#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{normal_cdf, z_score_to_percentile};

    #[test]
    fn cdf_known_values() {
        assert_abs_diff_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(normal_cdf(1.0), 0.841344746, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_cdf(-1.0), 0.158655254, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_cdf(1.96), 0.975002105, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_cdf(10.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(normal_cdf(-10.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_is_exactly_fiftieth() {
        assert_eq!(z_score_to_percentile(0.0), 50.0);
        assert_eq!(z_score_to_percentile(-0.0), 50.0);
    }

    #[test]
    fn percentile_is_symmetric() {
        let mut z = -4.0;
        while z <= 4.0 {
            let sum = z_score_to_percentile(z) + z_score_to_percentile(-z);
            assert_abs_diff_eq!(sum, 100.0, epsilon = 0.1 + 1e-9);
            z += 0.13;
        }
    }

    #[test]
    fn negative_z_is_below_median() {
        assert!(z_score_to_percentile(-0.5) < 50.0);
        assert!(z_score_to_percentile(0.5) > 50.0);
        assert_eq!(z_score_to_percentile(-1.88), 3.0);
        assert_eq!(z_score_to_percentile(1.88), 97.0);
    }

    #[test]
    fn percentile_stays_in_range() {
        for z in [-40.0, -8.0, 8.0, 40.0] {
            let p = z_score_to_percentile(z);
            assert!((0.0..=100.0).contains(&p));
        }
    }
}
